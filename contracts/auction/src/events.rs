use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::BidAsset;

/// Event emitted when the engine is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub native_token: Address,
}

/// Event emitted when a seller opens an auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub seller: Address,
    pub start_price: i128,
    pub bidding_asset: BidAsset,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when a bid takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub asset: BidAsset,
}

/// Event emitted when an outbid stake is credited to the refund ledger
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundCreditedEventData {
    #[topic]
    pub account: Address,
    pub asset: BidAsset,
    pub amount: i128,
}

/// Event emitted when an outbid stake is pushed back synchronously
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundPushedEventData {
    #[topic]
    pub account: Address,
    pub asset: BidAsset,
    pub amount: i128,
}

/// Event emitted when a ledger balance is withdrawn
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub account: Address,
    pub asset: BidAsset,
    pub amount: i128,
}

/// Event emitted when the admin registers a price feed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedSetEventData {
    pub asset: BidAsset,
    pub feed: Address,
}

/// Event emitted when an auction settles
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when the admin role is handed over
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEventData {
    #[topic]
    pub previous_admin: Address,
    pub new_admin: Address,
}

/// Event emitted when the contract code is upgraded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEventData {
    pub wasm_hash: BytesN<32>,
}
