multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Tax Policy — which transfers pay the fee
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TaxPolicy {
    /// Only buys from and sells to the pool are taxed. Peer transfers are free.
    PoolAware,
    /// Every transfer between outside parties is taxed.
    Flat,
}

// ============================================================
// Fee Routing — where the fee lands
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeeRouting {
    /// Straight to the fee receiver.
    Direct,
    /// Held by the token contract until `distributeFees`.
    Accumulate,
}

// ============================================================
// Transfer Leg — how a (from, to) pair relates to the pool
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransferLeg {
    /// The token contract itself sends or receives.
    Internal,
    /// Pool -> outside party.
    Buy,
    /// Outside party -> pool.
    Sell,
    /// Anything else, including pool -> pool.
    Peer,
}

impl TransferLeg {
    pub fn classify(involves_contract: bool, from_pool: bool, to_pool: bool) -> Self {
        if involves_contract {
            TransferLeg::Internal
        } else if from_pool && !to_pool {
            TransferLeg::Buy
        } else if to_pool && !from_pool {
            TransferLeg::Sell
        } else {
            TransferLeg::Peer
        }
    }
}

impl TaxPolicy {
    /// Whether a transfer on `leg` pays the fee. Nothing is taxed until
    /// trading is enabled, and internal movements are never taxed.
    pub fn charges(&self, leg: TransferLeg, trading_enabled: bool) -> bool {
        if !trading_enabled {
            return false;
        }
        match (self, leg) {
            (_, TransferLeg::Internal) => false,
            (TaxPolicy::Flat, _) => true,
            (TaxPolicy::PoolAware, TransferLeg::Buy | TransferLeg::Sell) => true,
            (TaxPolicy::PoolAware, TransferLeg::Peer) => false,
        }
    }
}
