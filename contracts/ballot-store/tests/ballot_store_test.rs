use ballot_store::types::BallotPhase;
use ballot_store::BallotStore;
use multiversx_sc::codec::top_encode_to_vec_u8_or_panic;
use multiversx_sc::types::{Address, ManagedVec, MultiValueEncoded};
use multiversx_sc_scenario::{
    managed_address, managed_buffer,
    multiversx_chain_vm::tx_mock::{TxLog, TxResult},
    rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};

const WASM_PATH: &str = "output/ballot-store.wasm";

const NOW: u64 = 1_700_000_000;
const QUESTION: &[u8] = b"Who is the greatest rapper of all time?";
const OPTIONS: &[&[u8]] = &[
    b"Tupac Shakur",
    b"The Notorious B.I.G.",
    b"Eminem",
    b"Jay-Z",
];

type BallotContract = ballot_store::ContractObj<DebugApi>;

struct BallotStoreSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> BallotContract,
{
    b_mock: BlockchainStateWrapper,
    voter: Address,
    other_voter: Address,
    sc_wrapper: ContractObjWrapper<BallotContract, Builder>,
}

impl<Builder> BallotStoreSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> BallotContract,
{
    fn new(builder: Builder) -> Self {
        let _ = DebugApi::dummy();
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let voter = b_mock.create_user_account(&rust_zero);
        let other_voter = b_mock.create_user_account(&rust_zero);
        let sc_wrapper = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

        b_mock.set_block_timestamp(NOW);
        b_mock
            .execute_tx(&owner, &sc_wrapper, &rust_zero, |sc| {
                sc.init();
            })
            .assert_ok();

        BallotStoreSetup {
            b_mock,
            voter,
            other_voter,
            sc_wrapper,
        }
    }

    fn create_ballot(
        &mut self,
        options: &[&[u8]],
        start_time: u64,
        duration: u64,
        expected_err: Option<&str>,
    ) -> TxResult {
        let creator = self.voter.clone();
        let result = self.b_mock.execute_tx(
            &creator,
            &self.sc_wrapper,
            &rust_biguint!(0),
            |sc| {
                let mut ballot_options = MultiValueEncoded::new();
                for option in options {
                    ballot_options.push(managed_buffer!(*option));
                }
                sc.create_ballot(managed_buffer!(QUESTION), start_time, duration, ballot_options);
            },
        );
        match expected_err {
            None => result.assert_ok(),
            Some(message) => result.assert_user_error(message),
        }
        result
    }

    fn cast(
        &mut self,
        voter: &Address,
        ballot_index: usize,
        option_index: usize,
        expected_err: Option<&str>,
    ) -> TxResult {
        let result = self.b_mock.execute_tx(
            voter,
            &self.sc_wrapper,
            &rust_biguint!(0),
            |sc| {
                sc.cast(ballot_index, option_index);
            },
        );
        match expected_err {
            None => result.assert_ok(),
            Some(message) => result.assert_user_error(message),
        }
        result
    }

    fn tally(&mut self, ballot_index: usize, option_index: usize) -> u64 {
        let mut tally = 0u64;
        self.b_mock
            .execute_query(&self.sc_wrapper, |sc| {
                tally = sc.get_tally(ballot_index, option_index);
            })
            .assert_ok();
        tally
    }

    fn has_voted(&mut self, ballot_index: usize, voter: &Address) -> bool {
        let mut voted = false;
        self.b_mock
            .execute_query(&self.sc_wrapper, |sc| {
                voted = sc.has_address_voted(ballot_index, &managed_address!(voter));
            })
            .assert_ok();
        voted
    }
}

fn event_log<'a>(result: &'a TxResult, identifier: &str) -> &'a TxLog {
    result
        .result_logs
        .iter()
        .find(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .unwrap_or_else(|| panic!("no `{identifier}` event emitted"))
}

#[test]
fn test_contract_builds() {
    let _: fn() -> BallotContract = ballot_store::contract_obj;
}

#[test]
fn create_ballot_stores_all_fields() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);

    setup
        .b_mock
        .execute_query(&setup.sc_wrapper, |sc| {
            let ballot = sc.get_ballot_by_index(0);
            let mut expected_options = ManagedVec::new();
            for option in OPTIONS {
                expected_options.push(managed_buffer!(*option));
            }
            assert_eq!(ballot.question, managed_buffer!(QUESTION));
            assert_eq!(ballot.options, expected_options);
            assert_eq!(ballot.start_time, NOW + 60);
            assert_eq!(ballot.duration, 300);
            assert_eq!(sc.get_ballot_count(), 1);
            assert_eq!(sc.get_ballot_phase(0), BallotPhase::Pending);
        })
        .assert_ok();
}

#[test]
fn ballots_get_sequential_indices() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);
    setup.create_ballot(&OPTIONS[..2], NOW + 120, 50, None);

    setup
        .b_mock
        .execute_query(&setup.sc_wrapper, |sc| {
            assert_eq!(sc.get_ballot_count(), 2);
            let second = sc.get_ballot_by_index(1);
            assert_eq!(second.options.len(), 2);
            assert_eq!(second.start_time, NOW + 120);
        })
        .assert_ok();
}

#[test]
fn create_ballot_rejects_single_option() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    setup.create_ballot(&OPTIONS[..1], NOW + 60, 300, Some("Provide at minimum two options"));
}

#[test]
fn create_ballot_rejects_past_or_current_start() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    setup.create_ballot(OPTIONS, NOW - 60, 300, Some("Start time must be in the future"));
    setup.create_ballot(OPTIONS, NOW, 300, Some("Start time must be in the future"));
}

#[test]
fn create_ballot_rejects_zero_duration() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    setup.create_ballot(OPTIONS, NOW + 60, 0, Some("Duration must be greater than 0"));
}

#[test]
fn cast_follows_the_ballot_window() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let voter = setup.voter.clone();
    setup.create_ballot(&OPTIONS[..2], NOW + 60, 300, None);

    setup.cast(&voter, 0, 1, Some("Ballot has not started"));

    setup.b_mock.set_block_timestamp(NOW + 61);
    setup.cast(&voter, 0, 1, None);
    assert_eq!(setup.tally(0, 1), 1);

    setup.cast(&voter, 0, 0, Some("Already voted"));
    assert_eq!(setup.tally(0, 0), 0);
    assert_eq!(setup.tally(0, 1), 1);
    assert!(setup.has_voted(0, &voter));
}

#[test]
fn cast_rejected_once_window_closes() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let other_voter = setup.other_voter.clone();
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);

    // last open second
    setup.b_mock.set_block_timestamp(NOW + 60 + 299);
    setup.cast(&other_voter, 0, 2, None);

    let voter = setup.voter.clone();
    setup.b_mock.set_block_timestamp(NOW + 60 + 300);
    setup.cast(&voter, 0, 2, Some("Ballot has ended"));
    assert!(!setup.has_voted(0, &voter));

    setup
        .b_mock
        .execute_query(&setup.sc_wrapper, |sc| {
            assert_eq!(sc.get_ballot_phase(0), BallotPhase::Closed);
            assert_eq!(sc.get_vote_count(0), 1);
        })
        .assert_ok();
}

#[test]
fn invalid_option_does_not_mark_voter() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let voter = setup.voter.clone();
    setup.create_ballot(&OPTIONS[..2], NOW + 60, 300, None);
    setup.b_mock.set_block_timestamp(NOW + 100);

    setup.cast(&voter, 0, 2, Some("Invalid option index"));
    assert!(!setup.has_voted(0, &voter));

    setup.cast(&voter, 0, 0, None);
    assert!(setup.has_voted(0, &voter));
}

#[test]
fn cast_on_unknown_ballot_fails() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let voter = setup.voter.clone();
    setup.cast(&voter, 0, 0, Some("Ballot does not exist"));
}

#[test]
fn votes_are_tracked_per_ballot() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let voter = setup.voter.clone();
    let other_voter = setup.other_voter.clone();
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);
    setup.b_mock.set_block_timestamp(NOW + 60);

    setup.cast(&voter, 0, 3, None);
    setup.cast(&voter, 1, 3, None);
    setup.cast(&other_voter, 0, 3, None);

    assert_eq!(setup.tally(0, 3), 2);
    assert_eq!(setup.tally(1, 3), 1);
    assert!(!setup.has_voted(1, &other_voter));

    setup
        .b_mock
        .execute_query(&setup.sc_wrapper, |sc| {
            let results: Vec<u64> = sc.get_results(0).into_iter().collect();
            assert_eq!(results, vec![0, 0, 0, 2]);
        })
        .assert_ok();
}

#[test]
fn create_and_cast_emit_events() {
    let mut setup = BallotStoreSetup::new(ballot_store::contract_obj);
    let voter = setup.voter.clone();
    setup.create_ballot(OPTIONS, NOW + 60, 300, None);

    let result = setup.create_ballot(&OPTIONS[..2], NOW + 120, 50, None);
    let created = event_log(&result, "ballotCreated");
    assert_eq!(
        created.topics[1..],
        [
            top_encode_to_vec_u8_or_panic(&1usize),
            voter.to_vec(),
            top_encode_to_vec_u8_or_panic(&(NOW + 120)),
        ]
    );
    assert_eq!(created.data, vec![top_encode_to_vec_u8_or_panic(&50u64)]);

    setup.b_mock.set_block_timestamp(NOW + 120);
    let result = setup.cast(&voter, 1, 1, None);
    let vote = event_log(&result, "vote");
    assert_eq!(
        vote.topics[1..],
        [top_encode_to_vec_u8_or_panic(&1usize), voter.to_vec()]
    );
    assert_eq!(vote.data, vec![top_encode_to_vec_u8_or_panic(&1usize)]);
}
