
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::types::BidAsset;
use crate::{AuctionContract, AuctionContractClient};

pub const START_BALANCE: i128 = 10_000_000_000_000;

// ─── mock collaborators ─────────────────────────────────────────────────────

/// Minimal NFT contract with the owner/approval surface the engine consumes.
#[contracttype]
#[derive(Clone)]
pub enum NftKey {
    Owner(u64),
    Approved(u64),
}

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u64) {
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap()
    }

    pub fn approve(env: Env, owner: Address, operator: Address, token_id: u64) {
        owner.require_auth();
        let current: Address = env
            .storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap();
        assert_eq!(current, owner);
        env.storage()
            .persistent()
            .set(&NftKey::Approved(token_id), &operator);
    }

    pub fn is_approved(env: Env, operator: Address, token_id: u64) -> bool {
        env.storage()
            .persistent()
            .get::<_, Address>(&NftKey::Approved(token_id))
            == Some(operator)
    }

    pub fn transfer_from(env: Env, operator: Address, from: Address, to: Address, token_id: u64) {
        operator.require_auth();
        let owner: Address = env
            .storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .unwrap();
        assert_eq!(owner, from);
        if operator != owner {
            let approved: Option<Address> =
                env.storage().persistent().get(&NftKey::Approved(token_id));
            assert_eq!(approved, Some(operator));
        }
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
        env.storage().persistent().remove(&NftKey::Approved(token_id));
    }
}

/// Fixed-price feed in the shape the engine's `PriceFeedClient` expects.
#[contracttype]
#[derive(Clone)]
pub enum FeedKey {
    Price,
    Decimals,
}

#[contract]
pub struct MockFeed;

#[contractimpl]
impl MockFeed {
    pub fn init(env: Env, price: i128, decimals: u32) {
        env.storage().instance().set(&FeedKey::Price, &price);
        env.storage().instance().set(&FeedKey::Decimals, &decimals);
    }

    pub fn latest_price(env: Env) -> (i128, u32) {
        (
            env.storage().instance().get(&FeedKey::Price).unwrap(),
            env.storage().instance().get(&FeedKey::Decimals).unwrap(),
        )
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockTokenError {
    Rejected = 1,
}

/// Token that reports failure as an error outcome instead of trapping,
/// regardless of balances or approvals.
#[contract]
pub struct RejectingToken;

#[contractimpl]
impl RejectingToken {
    pub fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) -> Result<(), MockTokenError> {
        Err(MockTokenError::Rejected)
    }
}

// ─── fixture ────────────────────────────────────────────────────────────────

pub struct Fixture {
    pub env: Env,
    pub engine: AuctionContractClient<'static>,
    pub engine_id: Address,
    pub admin: Address,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub nft: MockNftClient<'static>,
    pub nft_id: Address,
    pub native: token::TokenClient<'static>,
    pub native_id: Address,
    pub tkn: token::TokenClient<'static>,
    pub tkn_id: Address,
}

pub fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let engine_id = env.register(AuctionContract, ());
    let engine = AuctionContractClient::new(&env, &engine_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);

    let native_admin = Address::generate(&env);
    let native_contract = env.register_stellar_asset_contract_v2(native_admin);
    let native_id = native_contract.address();
    let native = token::TokenClient::new(&env, &native_id);
    let native_sac = token::StellarAssetClient::new(&env, &native_id);
    native_sac.mint(&bidder1, &START_BALANCE);
    native_sac.mint(&bidder2, &START_BALANCE);

    let tkn_admin = Address::generate(&env);
    let tkn_contract = env.register_stellar_asset_contract_v2(tkn_admin);
    let tkn_id = tkn_contract.address();
    let tkn = token::TokenClient::new(&env, &tkn_id);
    let tkn_sac = token::StellarAssetClient::new(&env, &tkn_id);
    tkn_sac.mint(&bidder1, &START_BALANCE);
    tkn_sac.mint(&bidder2, &START_BALANCE);

    let nft_id = env.register(MockNft, ());
    let nft = MockNftClient::new(&env, &nft_id);

    engine.initialize(&admin, &native_id);

    // Move off the zero timestamp so before/after cases are expressible.
    advance_ledger(&env, 1_000);

    Fixture {
        env,
        engine,
        engine_id,
        admin,
        seller,
        bidder1,
        bidder2,
        nft,
        nft_id,
        native,
        native_id,
        tkn,
        tkn_id,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Mint `token_id` to the seller, approve the engine, and open an auction
/// whose window starts `start_in` seconds from now and runs `duration`.
pub fn create_auction_with(
    fx: &Fixture,
    token_id: u64,
    start_price: i128,
    bidding_asset: &BidAsset,
    start_in: u64,
    duration: u64,
) -> (u64, u64) {
    fx.nft.mint(&fx.seller, &token_id);
    fx.nft.approve(&fx.seller, &fx.engine_id, &token_id);

    let start = fx.env.ledger().timestamp() + start_in;
    let end = start + duration;
    fx.engine.create_auction(
        &fx.seller,
        &fx.nft_id,
        &token_id,
        &start_price,
        bidding_asset,
        &start,
        &end,
    );
    (start, end)
}

/// Native-denominated auction open for bidding immediately.
pub fn create_native_auction(fx: &Fixture, token_id: u64, start_price: i128) -> (u64, u64) {
    create_auction_with(fx, token_id, start_price, &BidAsset::Native, 0, 1_000)
}

/// Auction denominated in the test token, open immediately.
pub fn create_token_auction(fx: &Fixture, token_id: u64, start_price: i128) -> (u64, u64) {
    let asset = BidAsset::Token(fx.tkn_id.clone());
    create_auction_with(fx, token_id, start_price, &asset, 0, 1_000)
}

/// Register a fixed-price feed for `asset` on the engine.
pub fn register_feed(fx: &Fixture, asset: &BidAsset, price: i128, decimals: u32) -> Address {
    let feed_id = fx.env.register(MockFeed, ());
    MockFeedClient::new(&fx.env, &feed_id).init(&price, &decimals);
    fx.engine.set_feed(&fx.admin, asset, &feed_id);
    feed_id
}

/// Allow the engine to pull `amount` of the test token from `from`.
pub fn approve_tkn(fx: &Fixture, from: &Address, amount: i128) {
    fx.tkn.approve(from, &fx.engine_id, &amount, &1_000);
}
