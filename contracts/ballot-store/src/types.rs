multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Ballot Phase — derived from the window and the block time
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BallotPhase {
    /// Start time not reached yet. No votes accepted.
    Pending,
    /// `start_time <= now < start_time + duration`.
    Open,
    /// Window elapsed. Tallies are final.
    Closed,
}

impl BallotPhase {
    /// Phase of a ballot window at `now`. Never stored, so it cannot go stale.
    pub fn at(start_time: u64, duration: u64, now: u64) -> Self {
        if now < start_time {
            BallotPhase::Pending
        } else if now - start_time < duration {
            BallotPhase::Open
        } else {
            BallotPhase::Closed
        }
    }
}

// ============================================================
// Ballot — immutable once created
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Ballot<M: ManagedTypeApi> {
    pub question: ManagedBuffer<M>,
    pub options: ManagedVec<M, ManagedBuffer<M>>,
    pub start_time: u64,
    pub duration: u64,
}

impl<M: ManagedTypeApi> Ballot<M> {
    pub fn phase(&self, now: u64) -> BallotPhase {
        BallotPhase::at(self.start_time, self.duration, now)
    }
}
