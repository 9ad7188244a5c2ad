#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::Post;

// ============================================================
// Contract
// ============================================================

/// Fee-gated list of expiring posts.
///
/// Posts live in a `VecMapper` and are removed with `swap_remove`, so a post's
/// index is only stable until the next removal.
#[multiversx_sc::contract]
pub trait PostRegistry {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, fee: BigUint) {
        self.fee().set(&fee);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setFee (owner)
    // ========================================================

    #[endpoint(setFee)]
    fn set_fee(&self, fee: BigUint) {
        let caller = self.require_owner();

        self.fee().set(&fee);

        self.set_fee_event(&caller, &fee);
    }

    // ========================================================
    // ENDPOINT: create
    // Payment must match the current fee exactly.
    // ========================================================

    #[endpoint(create)]
    #[payable("EGLD")]
    fn create(&self, uri: ManagedBuffer, expiry: u64) -> usize {
        let payment = self.call_value().egld_value().clone_value();
        require!(payment == self.fee().get(), "Incorrect fee");

        let author = self.blockchain().get_caller();
        let post = Post {
            author: author.clone(),
            uri,
            expiry,
        };
        let index = self.posts().push(&post) - 1;

        self.create_event(&author, &post.uri, expiry, &payment);

        index
    }

    // ========================================================
    // ENDPOINT: remove (owner)
    // ========================================================

    #[endpoint(remove)]
    fn remove(&self, index: usize) {
        let caller = self.require_owner();
        require!(index < self.posts().len(), "Index out of range");

        self.posts().swap_remove(index + 1);

        self.remove_event(&caller, 1usize);
    }

    // ========================================================
    // ENDPOINT: cleanup
    // Anyone can sweep expired posts. Always emits, even for 0.
    // ========================================================

    #[endpoint(cleanup)]
    fn cleanup(&self) -> usize {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut posts = self.posts();
        let mut removed = 0usize;
        let mut index = 1usize;
        while index <= posts.len() {
            if posts.get(index).is_expired(now) {
                // the last post moves into `index`, so look at it again
                posts.swap_remove(index);
                removed += 1;
            } else {
                index += 1;
            }
        }

        self.remove_event(&caller, removed);

        removed
    }

    // ========================================================
    // ENDPOINT: release (owner)
    // Sends every collected fee to `to`. Always emits, even for 0.
    // ========================================================

    #[endpoint(release)]
    fn release(&self, to: ManagedAddress) -> BigUint {
        let caller = self.require_owner();

        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if amount > 0u64 {
            self.send().direct_egld(&to, &amount);
        }
        self.release_event(&caller, &amount);

        amount
    }

    // ========================================================
    // INTERNAL
    // ========================================================

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

    #[view(length)]
    fn length(&self) -> usize {
        self.posts().len()
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    #[view(getPost)]
    fn get_post(&self, index: usize) -> Post<Self::Api> {
        require!(index < self.posts().len(), "Index out of range");
        self.posts().get(index + 1)
    }

    #[view(getPosts)]
    fn get_posts(&self) -> MultiValueEncoded<Post<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for post in self.posts().iter() {
            result.push(post);
        }
        result
    }

    /// How many posts `cleanup` would remove at the current block time.
    #[view(countExpired)]
    fn count_expired(&self) -> usize {
        let now = self.blockchain().get_block_timestamp();
        self.posts()
            .iter()
            .filter(|post| post.is_expired(now))
            .count()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("setFee")]
    fn set_fee_event(&self, #[indexed] caller: &ManagedAddress, fee: &BigUint);

    #[event("create")]
    fn create_event(
        &self,
        #[indexed] author: &ManagedAddress,
        #[indexed] uri: &ManagedBuffer,
        #[indexed] expiry: u64,
        payment: &BigUint,
    );

    #[event("remove")]
    fn remove_event(&self, #[indexed] caller: &ManagedAddress, count: usize);

    #[event("release")]
    fn release_event(&self, #[indexed] caller: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(fee)]
    #[storage_mapper("fee")]
    fn fee(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("posts")]
    fn posts(&self) -> VecMapper<Post<Self::Api>>;
}
