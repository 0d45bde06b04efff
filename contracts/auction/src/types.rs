use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent entries (30 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Denomination of a bid: the chain's native asset or a fungible token
/// contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BidAsset {
    /// The native asset, moved through the SAC configured at initialization
    Native,
    /// A fungible token contract
    Token(Address),
}

/// Auction record for a single asset, keyed by (asset contract, asset id).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub asset_contract: Address,
    pub asset_id: u64,
    /// Minimum first bid, denominated in the asset the seller listed in.
    pub start_price: i128,
    /// Denomination of the current highest bid. Follows the lead when an
    /// oracle-normalized bid in a different asset takes over.
    pub bidding_asset: BidAsset,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub settled: bool,
}

/// Storage keys for the auction engine.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Initialization flag
    Initialized,
    /// SAC address used to move the native asset
    NativeToken,
    /// Auction record by (asset contract, asset id)
    Auction(Address, u64),
    /// Claimable refund balance by (account, asset)
    Refund(Address, BidAsset),
    /// Price feed contract by asset
    Feed(BidAsset),
}
