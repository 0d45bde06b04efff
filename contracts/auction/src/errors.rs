use soroban_sdk::contracterror;

/// Error codes for the auction engine.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the stored admin
    NotAuthorized = 3,
    /// Seller does not own the asset
    NotOwner = 4,
    /// Engine has not been approved to transfer the asset
    NotApproved = 5,
    /// Start price must be greater than zero
    InvalidStartPrice = 6,
    /// Start time is in the past
    InvalidStartTime = 7,
    /// End time does not follow start time
    InvalidTimeRange = 8,
    /// An unsettled auction already exists for this asset
    AuctionExists = 9,
    /// No auction stored for this asset
    AuctionNotFound = 10,
    /// Bidding window has not opened yet
    AuctionNotStarted = 11,
    /// Bidding window has closed
    AuctionEnded = 12,
    /// Auction cannot settle before its end time
    AuctionNotEnded = 13,
    /// Auction has already been settled
    AlreadySettled = 14,
    /// Bid does not exceed the acceptance threshold
    BidTooLow = 15,
    /// Bid denomination does not match the auction's bidding asset
    WrongAsset = 16,
    /// No price feed registered for the asset
    TokenNotSupported = 17,
    /// Arithmetic overflow during price normalization
    Overflow = 18,
}
