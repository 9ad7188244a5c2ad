multiversx_sc::derive_imports!();
multiversx_sc::imports!();

/// A paid entry that anyone may clean up once `expiry` has passed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Post<M: ManagedTypeApi> {
    pub author: ManagedAddress<M>,
    pub uri: ManagedBuffer<M>,
    pub expiry: u64,
}

impl<M: ManagedTypeApi> Post<M> {
    /// Expired posts include the one expiring exactly now.
    pub fn is_expired(&self, now: u64) -> bool {
        self.expiry <= now
    }
}
