#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::{Ballot, BallotPhase};

// ============================================================
// Constants
// ============================================================

/// A ballot needs at least two options to be a choice.
const MIN_OPTIONS: usize = 2;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait BallotStore {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createBallot
    // Anyone can open a ballot that starts in the future.
    // Options come last, one argument each.
    // ========================================================

    #[endpoint(createBallot)]
    fn create_ballot(
        &self,
        question: ManagedBuffer,
        start_time: u64,
        duration: u64,
        options: MultiValueEncoded<ManagedBuffer>,
    ) -> usize {
        let options = options.to_vec();
        require!(
            options.len() >= MIN_OPTIONS,
            "Provide at minimum two options"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(start_time > now, "Start time must be in the future");
        require!(duration > 0, "Duration must be greater than 0");

        let ballot = Ballot {
            question,
            options,
            start_time,
            duration,
        };

        // VecMapper is 1-based; ballots are addressed from 0 externally.
        let ballot_index = self.ballots().push(&ballot) - 1;

        let caller = self.blockchain().get_caller();
        self.ballot_created_event(ballot_index, &caller, start_time, duration);

        ballot_index
    }

    // ========================================================
    // ENDPOINT: cast
    // One vote per address per ballot, only while Open.
    // ========================================================

    #[endpoint(cast)]
    fn cast(&self, ballot_index: usize, option_index: usize) {
        let ballot = self.require_ballot(ballot_index);

        let now = self.blockchain().get_block_timestamp();
        match ballot.phase(now) {
            BallotPhase::Pending => sc_panic!("Ballot has not started"),
            BallotPhase::Closed => sc_panic!("Ballot has ended"),
            BallotPhase::Open => {}
        }

        let caller = self.blockchain().get_caller();
        require!(
            !self.has_voted(ballot_index, &caller).get(),
            "Already voted"
        );
        require!(
            option_index < ballot.options.len(),
            "Invalid option index"
        );

        self.has_voted(ballot_index, &caller).set(true);
        self.tally(ballot_index, option_index).update(|t| *t += 1);
        self.vote_count(ballot_index).update(|c| *c += 1);

        self.vote_event(ballot_index, &caller, option_index);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_ballot(&self, ballot_index: usize) -> Ballot<Self::Api> {
        require!(
            ballot_index < self.ballots().len(),
            "Ballot does not exist"
        );
        self.ballots().get(ballot_index + 1)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getBallotByIndex)]
    fn get_ballot_by_index(&self, ballot_index: usize) -> Ballot<Self::Api> {
        self.require_ballot(ballot_index)
    }

    #[view(getBallotCount)]
    fn get_ballot_count(&self) -> usize {
        self.ballots().len()
    }

    #[view(getTally)]
    fn get_tally(&self, ballot_index: usize, option_index: usize) -> u64 {
        let ballot = self.require_ballot(ballot_index);
        require!(
            option_index < ballot.options.len(),
            "Invalid option index"
        );
        self.tally(ballot_index, option_index).get()
    }

    /// Tallies for every option, in option order.
    #[view(getResults)]
    fn get_results(&self, ballot_index: usize) -> MultiValueEncoded<u64> {
        let ballot = self.require_ballot(ballot_index);
        let mut result = MultiValueEncoded::new();
        for option_index in 0..ballot.options.len() {
            result.push(self.tally(ballot_index, option_index).get());
        }
        result
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, ballot_index: usize) -> u64 {
        self.vote_count(ballot_index).get()
    }

    #[view(hasVoted)]
    fn has_address_voted(&self, ballot_index: usize, voter: &ManagedAddress) -> bool {
        self.has_voted(ballot_index, voter).get()
    }

    #[view(getBallotPhase)]
    fn get_ballot_phase(&self, ballot_index: usize) -> BallotPhase {
        let ballot = self.require_ballot(ballot_index);
        ballot.phase(self.blockchain().get_block_timestamp())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ballotCreated")]
    fn ballot_created_event(
        &self,
        #[indexed] ballot_index: usize,
        #[indexed] creator: &ManagedAddress,
        #[indexed] start_time: u64,
        duration: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] ballot_index: usize,
        #[indexed] voter: &ManagedAddress,
        option_index: usize,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("ballots")]
    fn ballots(&self) -> VecMapper<Ballot<Self::Api>>;

    #[storage_mapper("tally")]
    fn tally(&self, ballot_index: usize, option_index: usize) -> SingleValueMapper<u64>;

    #[storage_mapper("voteCount")]
    fn vote_count(&self, ballot_index: usize) -> SingleValueMapper<u64>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, ballot_index: usize, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
