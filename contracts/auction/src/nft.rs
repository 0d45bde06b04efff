use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external asset (NFT) contract the engine auctions
/// against. The engine reads ownership and approval at creation and moves
/// the asset once at settlement, passing itself as the operator.
#[contractclient(name = "NftClient")]
pub trait NonFungible {
    /// Current owner of `token_id`.
    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Whether `operator` may transfer `token_id` on the owner's behalf.
    fn is_approved(env: Env, operator: Address, token_id: u64) -> bool;

    /// Move `token_id` from `from` to `to`. `operator` must be the owner or
    /// an approved operator.
    fn transfer_from(env: Env, operator: Address, from: Address, to: Address, token_id: u64);
}
