#![no_std]

multiversx_sc::imports!();

pub mod schedule;

use schedule::VestingSchedule;

// ============================================================
// Contract
// ============================================================

/// Releases one ESDT token to a fixed set of recipients, linearly over a
/// single window. Allocations are set at deploy and never change.
#[multiversx_sc::contract]
pub trait VestingLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `recipients[i]` is granted `allocations[i]`. The recipient list is
    /// count-prefixed so the allocations can follow it as plain arguments.
    #[init]
    fn init(
        &self,
        token: TokenIdentifier,
        start_time: u64,
        duration: u64,
        recipients: MultiValueManagedVecCounted<ManagedAddress>,
        allocations: MultiValueEncoded<BigUint>,
    ) {
        let recipients = recipients.into_vec();
        let allocations = allocations.to_vec();
        require!(token.is_valid_esdt_identifier(), "Invalid token identifier");
        require!(
            recipients.len() == allocations.len(),
            "Recipients and allocations length mismatch"
        );
        require!(duration > 0, "Duration must be greater than 0");

        self.token().set(&token);
        self.schedule().set(VestingSchedule {
            start_time,
            duration,
        });

        let mut total_allocated = BigUint::zero();
        for index in 0..recipients.len() {
            let recipient = (*recipients.get(index)).clone();
            let allocation = (*allocations.get(index)).clone();

            require!(
                self.recipients().insert(recipient.clone()),
                "Duplicate recipient"
            );
            total_allocated += &allocation;
            self.allocation(&recipient).set(&allocation);
        }
        self.total_allocated().set(&total_allocated);
        self.total_released().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Anyone can top up the ledger's holdings of the vested token.
    // ========================================================

    #[endpoint(fund)]
    #[payable("*")]
    fn fund(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.token().get(),
            "Wrong payment token"
        );

        let caller = self.blockchain().get_caller();
        self.fund_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: claim
    // Sends the caller everything vested and not yet released.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        require!(
            self.schedule().get().has_started(now),
            "Vesting has not started"
        );

        let caller = self.blockchain().get_caller();
        let amount = self.available_at(&caller, now);
        if amount == 0u64 {
            return amount;
        }

        let token = self.token().get();
        let holdings = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        require!(holdings >= amount, "Insufficient vault balance");

        // bookkeeping first, then the transfer
        self.released(&caller).update(|released| *released += &amount);
        self.total_released().update(|total| *total += &amount);

        self.send().direct_esdt(&caller, &token, 0, &amount);
        self.claim_event(&caller, &amount);

        amount
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn vested_at(&self, recipient: &ManagedAddress, now: u64) -> BigUint {
        let allocation = self.allocation(recipient).get();
        self.schedule().get().vested(&allocation, now)
    }

    fn available_at(&self, recipient: &ManagedAddress, now: u64) -> BigUint {
        let vested = self.vested_at(recipient, now);
        let released = self.released(recipient).get();
        if vested > released {
            vested - released
        } else {
            BigUint::zero()
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(available)]
    fn available(&self, recipient: &ManagedAddress) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        self.available_at(recipient, now)
    }

    /// Allocation not yet released, whether vested or not.
    #[view(outstanding)]
    fn outstanding(&self, recipient: &ManagedAddress) -> BigUint {
        self.allocation(recipient).get() - self.released(recipient).get()
    }

    #[view(vestedAmount)]
    fn vested_amount(&self, recipient: &ManagedAddress, timestamp: u64) -> BigUint {
        self.vested_at(recipient, timestamp)
    }

    /// (allocation, released, available, outstanding)
    #[view(getVestingStatus)]
    fn get_vesting_status(
        &self,
        recipient: &ManagedAddress,
    ) -> MultiValue4<BigUint, BigUint, BigUint, BigUint> {
        (
            self.allocation(recipient).get(),
            self.released(recipient).get(),
            self.available(recipient),
            self.outstanding(recipient),
        )
            .into()
    }

    #[view(startTime)]
    fn start_time(&self) -> u64 {
        self.schedule().get().start_time
    }

    #[view(duration)]
    fn duration(&self) -> u64 {
        self.schedule().get().duration
    }

    #[view(getRecipients)]
    fn get_recipients(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for recipient in self.recipients().iter() {
            result.push(recipient);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(&self, #[indexed] caller: &ManagedAddress, amount: &BigUint);

    #[event("claim")]
    fn claim_event(&self, #[indexed] recipient: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(token)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("schedule")]
    fn schedule(&self) -> SingleValueMapper<VestingSchedule>;

    #[storage_mapper("recipients")]
    fn recipients(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(allocation)]
    #[storage_mapper("allocation")]
    fn allocation(&self, recipient: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(released)]
    #[storage_mapper("released")]
    fn released(&self, recipient: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalAllocated)]
    #[storage_mapper("totalAllocated")]
    fn total_allocated(&self) -> SingleValueMapper<BigUint>;

    #[view(totalReleased)]
    #[storage_mapper("totalReleased")]
    fn total_released(&self) -> SingleValueMapper<BigUint>;
}
