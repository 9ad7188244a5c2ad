#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::{FeeRouting, TaxPolicy, TransferLeg};

// ============================================================
// Constants
// ============================================================

/// Fee percentages are whole percents of the transferred amount.
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Fungible balance book whose transfer path diverts a percentage of the
/// amount to a fee receiver, according to a [`TaxPolicy`].
#[multiversx_sc::contract]
pub trait FeeToken {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The whole `initial_supply` is credited to the deployer.
    #[init]
    fn init(
        &self,
        initial_supply: BigUint,
        fee_receiver: ManagedAddress,
        fee_percent: u64,
        tax_policy: TaxPolicy,
        fee_routing: FeeRouting,
        trading_enabled: bool,
    ) {
        require!(
            fee_percent <= PERCENT_DENOMINATOR,
            "Fee percentage above 100"
        );

        self.fee_receiver().set(&fee_receiver);
        self.fee_percent().set(fee_percent);
        self.tax_policy().set(tax_policy);
        self.fee_routing().set(fee_routing);
        self.trading_enabled().set(trading_enabled);
        self.fees_collected().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.balance(&deployer).set(&initial_supply);
        self.total_supply().set(&initial_supply);
        self.mint_event(&deployer, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: transfers
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_tokens(&caller, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        self.spend_allowance(&from, &spender, &amount);
        self.move_tokens(&from, &to, &amount);
    }

    // ========================================================
    // ENDPOINTS: administration (owner)
    // ========================================================

    /// One-way switch. Calling it again changes nothing.
    #[endpoint(enableTrading)]
    fn enable_trading(&self) {
        let caller = self.require_owner();
        if self.trading_enabled().get() {
            return;
        }

        self.trading_enabled().set(true);
        self.trading_enabled_event(&caller);
    }

    #[endpoint(setPool)]
    fn set_pool(&self, pool: ManagedAddress) {
        let caller = self.require_owner();
        require!(
            pool != self.blockchain().get_sc_address(),
            "Invalid pool address"
        );

        self.pool().set(&pool);
        self.pool_set_event(&caller, &pool);
    }

    /// Forwards the fees held by the contract to the fee receiver.
    #[endpoint(distributeFees)]
    fn distribute_fees(&self) -> BigUint {
        self.require_owner();

        let sc_address = self.blockchain().get_sc_address();
        let amount = self.balance(&sc_address).get();
        require!(amount > 0u64, "No fees to distribute");

        let receiver = self.fee_receiver().get();
        // contract -> receiver is an internal leg, so it is never taxed
        self.move_tokens(&sc_address, &receiver, &amount);
        self.fees_distributed_event(&receiver, &amount);

        amount
    }

    /// Mints to `to` and lets the owner burn the minted amount later.
    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        let owner = self.require_owner();

        self.balance(&to).update(|balance| *balance += &amount);
        self.total_supply().update(|supply| *supply += &amount);
        self.allowance(&to, &owner)
            .update(|allowance| *allowance += &amount);

        self.mint_event(&to, &amount);
    }

    #[endpoint(burnFrom)]
    fn burn_from(&self, account: ManagedAddress, amount: BigUint) {
        let owner = self.require_owner();
        self.spend_allowance(&account, &owner, &amount);

        let balance = self.balance(&account).get();
        require!(balance >= amount, "Insufficient balance");

        self.balance(&account).set(&balance - &amount);
        self.total_supply().update(|supply| *supply -= &amount);

        self.burn_event(&account, &amount);
    }

    // ========================================================
    // INTERNAL: transfer path
    // ========================================================

    fn move_tokens(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balance(from).get();
        require!(from_balance >= *amount, "Insufficient balance");

        let fee = self.assess_fee(from, to, amount);
        let net = amount - &fee;

        self.balance(from).set(&from_balance - amount);
        self.balance(to).update(|balance| *balance += &net);

        if fee > 0u64 {
            let fee_holder = self.fee_holder();
            self.balance(&fee_holder).update(|balance| *balance += &fee);
            self.fees_collected().update(|total| *total += &fee);
            self.fee_event(from, &fee_holder, &fee);
        }

        self.transfer_event(from, to, &net);
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let allowance = self.allowance(owner, spender).get();
        require!(allowance >= *amount, "Insufficient allowance");
        self.allowance(owner, spender).set(&allowance - amount);
    }

    fn transfer_leg(&self, from: &ManagedAddress, to: &ManagedAddress) -> TransferLeg {
        let sc_address = self.blockchain().get_sc_address();
        let involves_contract = *from == sc_address || *to == sc_address;

        let (from_pool, to_pool) = if self.pool().is_empty() {
            (false, false)
        } else {
            let pool = self.pool().get();
            (*from == pool, *to == pool)
        };

        TransferLeg::classify(involves_contract, from_pool, to_pool)
    }

    fn assess_fee(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) -> BigUint {
        let leg = self.transfer_leg(from, to);
        let charged = self
            .tax_policy()
            .get()
            .charges(leg, self.trading_enabled().get());
        if !charged {
            return BigUint::zero();
        }

        let percent = BigUint::from(self.fee_percent().get());
        amount * &percent / &BigUint::from(PERCENT_DENOMINATOR)
    }

    fn fee_holder(&self) -> ManagedAddress {
        match self.fee_routing().get() {
            FeeRouting::Direct => self.fee_receiver().get(),
            FeeRouting::Accumulate => self.blockchain().get_sc_address(),
        }
    }

    fn require_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            "Caller is not the owner"
        );
        caller
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// (amount received, fee) for a transfer made right now.
    #[view(quoteTransfer)]
    fn quote_transfer(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        amount: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        let fee = self.assess_fee(&from, &to, &amount);
        (&amount - &fee, fee).into()
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("fee")]
    fn fee_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] holder: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("tradingEnabled")]
    fn trading_enabled_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("poolSet")]
    fn pool_set_event(&self, #[indexed] caller: &ManagedAddress, pool: &ManagedAddress);

    #[event("feesDistributed")]
    fn fees_distributed_event(&self, #[indexed] receiver: &ManagedAddress, amount: &BigUint);

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("burn")]
    fn burn_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Ledger ──

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    // ── Fee configuration ──

    #[view(fund)]
    #[storage_mapper("feeReceiver")]
    fn fee_receiver(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(feePercent)]
    #[storage_mapper("feePercent")]
    fn fee_percent(&self) -> SingleValueMapper<u64>;

    #[view(taxPolicy)]
    #[storage_mapper("taxPolicy")]
    fn tax_policy(&self) -> SingleValueMapper<TaxPolicy>;

    #[view(feeRouting)]
    #[storage_mapper("feeRouting")]
    fn fee_routing(&self) -> SingleValueMapper<FeeRouting>;

    #[view(pool)]
    #[storage_mapper("pool")]
    fn pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isTradingEnabled)]
    #[storage_mapper("tradingEnabled")]
    fn trading_enabled(&self) -> SingleValueMapper<bool>;

    #[view(feesCollected)]
    #[storage_mapper("feesCollected")]
    fn fees_collected(&self) -> SingleValueMapper<BigUint>;
}
