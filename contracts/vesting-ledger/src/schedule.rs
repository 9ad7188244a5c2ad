//! Linear release window shared by every recipient of the ledger.

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct VestingSchedule {
    /// Nothing is claimable before this timestamp.
    pub start_time: u64,
    /// Length of the release window in seconds, never 0.
    pub duration: u64,
}

impl VestingSchedule {
    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start_time
    }

    /// Seconds of the window that have passed, clamped to `[0, duration]`.
    pub fn elapsed(&self, now: u64) -> u64 {
        if now < self.start_time {
            0
        } else {
            core::cmp::min(now - self.start_time, self.duration)
        }
    }

    pub fn is_complete(&self, now: u64) -> bool {
        self.elapsed(now) == self.duration
    }

    /// Amount of `allocation` unlocked at `now`, rounded down.
    ///
    /// Monotonic in `now` and equal to `allocation` once the window has
    /// passed, so cumulative claims can never exceed the allocation.
    pub fn vested<M: ManagedTypeApi>(&self, allocation: &BigUint<M>, now: u64) -> BigUint<M> {
        if self.is_complete(now) {
            return allocation.clone();
        }
        let elapsed = BigUint::<M>::from(self.elapsed(now));
        allocation * &elapsed / &BigUint::<M>::from(self.duration)
    }
}
