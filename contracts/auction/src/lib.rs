#![no_std]

mod admin;
mod errors;
mod events;
mod feed;
mod nft;
mod oracle;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env};

use crate::admin::require_admin;
use crate::errors::Error;
use crate::events::*;
use crate::nft::NftClient;
use crate::types::{Auction, BidAsset, DAY_IN_LEDGERS};

// ============================================================================
// Constants
// ============================================================================

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// NFT auction engine.
///
/// Runs single-asset auctions bid in the native asset or in fungible
/// tokens, with cross-asset bids normalized through price feeds. Outbid
/// stakes accumulate in a pull-payment refund ledger (the `bidding`
/// entrypoint instead pushes the refund synchronously); settlement
/// exchanges the asset against the highest bid exactly once.
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // INITIALIZATION / ADMIN
    // ========================================================================

    /// Initialize the engine.
    ///
    /// # Arguments
    /// * `admin` - Account that may register price feeds and upgrade
    /// * `native_token` - SAC address that moves the native asset
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If called a second time
    pub fn initialize(env: Env, admin: Address, native_token: Address) -> Result<(), Error> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_admin(&env, &admin);
        storage::set_native_token(&env, &native_token);
        storage::set_initialized(&env);
        extend_instance_ttl(&env);

        InitializedEventData {
            admin,
            native_token,
        }
        .publish(&env);

        Ok(())
    }

    /// Hand the admin role to another account (admin only).
    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin.require_auth();
        require_admin(&env, &admin)?;

        storage::set_admin(&env, &new_admin);
        extend_instance_ttl(&env);

        AdminTransferredEventData {
            previous_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    /// Replace the contract code (admin only). This is the gate the upgrade
    /// mechanism goes through; it is not otherwise reachable.
    pub fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        admin.require_auth();
        require_admin(&env, &admin)?;

        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());

        UpgradedEventData {
            wasm_hash: new_wasm_hash,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // AUCTION REGISTRY
    // ========================================================================

    /// Open an auction for a single asset.
    ///
    /// The seller must own the asset and must have approved the engine as
    /// operator beforehand. No funds move at creation.
    ///
    /// # Errors
    /// * `Error::NotOwner` - Seller is not the asset's current owner
    /// * `Error::NotApproved` - Engine has no transfer approval
    /// * `Error::InvalidStartPrice` - `start_price` is not positive
    /// * `Error::InvalidStartTime` - `start_time` is in the past
    /// * `Error::InvalidTimeRange` - `end_time` does not follow `start_time`
    /// * `Error::AuctionExists` - An unsettled auction holds this key
    pub fn create_auction(
        env: Env,
        seller: Address,
        asset_contract: Address,
        asset_id: u64,
        start_price: i128,
        bidding_asset: BidAsset,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        if !storage::is_initialized(&env) {
            return Err(Error::NotInitialized);
        }

        let asset = NftClient::new(&env, &asset_contract);
        if asset.owner_of(&asset_id) != seller {
            return Err(Error::NotOwner);
        }
        if !asset.is_approved(&env.current_contract_address(), &asset_id) {
            return Err(Error::NotApproved);
        }

        if start_price <= 0 {
            return Err(Error::InvalidStartPrice);
        }
        if start_time < env.ledger().timestamp() {
            return Err(Error::InvalidStartTime);
        }
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }

        if let Some(existing) = storage::get_auction(&env, &asset_contract, asset_id) {
            if !existing.settled {
                return Err(Error::AuctionExists);
            }
        }

        let auction = Auction {
            seller: seller.clone(),
            asset_contract: asset_contract.clone(),
            asset_id,
            start_price,
            bidding_asset: bidding_asset.clone(),
            start_time,
            end_time,
            highest_bid: 0,
            highest_bidder: None,
            settled: false,
        };
        storage::save_auction(&env, &auction);
        extend_instance_ttl(&env);

        AuctionCreatedEventData {
            asset_contract,
            asset_id,
            seller,
            start_price,
            bidding_asset,
            start_time,
            end_time,
        }
        .publish(&env);

        Ok(())
    }

    /// Auction record for (asset contract, asset id).
    pub fn get_auction(env: Env, asset_contract: Address, asset_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, &asset_contract, asset_id).ok_or(Error::AuctionNotFound)
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Ledgered native-asset bid.
    ///
    /// Pulls `amount` of the native asset into engine custody. The outbid
    /// leader's stake is credited to the refund ledger for later
    /// withdrawal. `min_accept` guards against a stale view of the auction:
    /// when non-zero and the acceptance threshold has already moved past
    /// it, the bid fails before any funds move.
    ///
    /// # Errors
    /// * `Error::WrongAsset` - Auction is not denominated in the native asset
    /// * `Error::BidTooLow` - `amount` does not strictly exceed the
    ///   threshold, or the threshold exceeds `min_accept`
    pub fn bid(
        env: Env,
        bidder: Address,
        asset_contract: Address,
        asset_id: u64,
        amount: i128,
        min_accept: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env, &asset_contract, asset_id)?;
        check_bid_window(&env, &auction)?;
        if auction.bidding_asset != BidAsset::Native {
            return Err(Error::WrongAsset);
        }

        let threshold = acceptance_threshold(&auction);
        if min_accept > 0 && threshold > min_accept {
            return Err(Error::BidTooLow);
        }
        if amount <= threshold {
            return Err(Error::BidTooLow);
        }

        collect_funds(&env, &BidAsset::Native, &bidder, amount)?;
        credit_outbid(&env, &auction);
        apply_lead(&env, &mut auction, &bidder, amount, BidAsset::Native);
        extend_instance_ttl(&env);

        Ok(())
    }

    /// Immediate-push native-asset bid.
    ///
    /// Identical validation to `bid`, but the outbid leader's stake is
    /// pushed back by synchronous transfer instead of a ledger credit. The
    /// push happens before the auction record is rewritten.
    pub fn bidding(
        env: Env,
        bidder: Address,
        asset_contract: Address,
        asset_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env, &asset_contract, asset_id)?;
        check_bid_window(&env, &auction)?;
        if auction.bidding_asset != BidAsset::Native {
            return Err(Error::WrongAsset);
        }
        if amount <= acceptance_threshold(&auction) {
            return Err(Error::BidTooLow);
        }

        collect_funds(&env, &BidAsset::Native, &bidder, amount)?;
        push_outbid(&env, &auction)?;
        apply_lead(&env, &mut auction, &bidder, amount, BidAsset::Native);
        extend_instance_ttl(&env);

        Ok(())
    }

    /// Direct fungible-token bid in the auction's own bidding asset.
    ///
    /// Pulls `amount` through the token's `transfer_from`, which reports
    /// failure as an outcome rather than trapping. A reported failure
    /// discards the bid: the call returns success with zero state change
    /// and no ledger credit, approval notwithstanding.
    ///
    /// # Errors
    /// * `Error::WrongAsset` - Auction is denominated in the native asset
    /// * `Error::BidTooLow` - `amount` does not strictly exceed the threshold
    pub fn bid_with_token(
        env: Env,
        bidder: Address,
        asset_contract: Address,
        asset_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env, &asset_contract, asset_id)?;
        check_bid_window(&env, &auction)?;
        let bid_asset = match &auction.bidding_asset {
            BidAsset::Token(_) => auction.bidding_asset.clone(),
            BidAsset::Native => return Err(Error::WrongAsset),
        };
        if amount <= acceptance_threshold(&auction) {
            return Err(Error::BidTooLow);
        }

        if !collect_funds(&env, &bid_asset, &bidder, amount)? {
            return Ok(());
        }
        credit_outbid(&env, &auction);
        apply_lead(&env, &mut auction, &bidder, amount, bid_asset);
        extend_instance_ttl(&env);

        Ok(())
    }

    /// Oracle-normalized bid in an arbitrary asset.
    ///
    /// The incoming amount and the standing bid (or the start price, for
    /// the first bid) are converted to a common USD-scaled value through
    /// their registered feeds and compared strictly. The comparison runs
    /// before any transfer; the raw amount and its asset become the new
    /// lead, and the outbid stake is credited in the asset it was
    /// denominated in.
    ///
    /// # Errors
    /// * `Error::TokenNotSupported` - Either side has no registered feed
    /// * `Error::BidTooLow` - Normalized value does not strictly exceed the
    ///   standing value
    pub fn bid_with_oracle(
        env: Env,
        bidder: Address,
        asset_contract: Address,
        asset_id: u64,
        bid_asset: BidAsset,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env, &asset_contract, asset_id)?;
        check_bid_window(&env, &auction)?;
        if amount <= 0 {
            return Err(Error::BidTooLow);
        }

        let incoming = oracle::normalized_value(&env, &bid_asset, amount)?;
        let standing = if auction.highest_bidder.is_some() {
            oracle::normalized_value(&env, &auction.bidding_asset, auction.highest_bid)?
        } else {
            oracle::normalized_value(&env, &auction.bidding_asset, auction.start_price)?
        };
        if incoming <= standing {
            return Err(Error::BidTooLow);
        }

        if !collect_funds(&env, &bid_asset, &bidder, amount)? {
            return Ok(());
        }
        credit_outbid(&env, &auction);
        apply_lead(&env, &mut auction, &bidder, amount, bid_asset);
        extend_instance_ttl(&env);

        Ok(())
    }

    // ========================================================================
    // REFUND LEDGER
    // ========================================================================

    /// Claimable balance for (account, asset).
    pub fn pending_refund(env: Env, account: Address, asset: BidAsset) -> i128 {
        storage::get_refund(&env, &account, &asset)
    }

    /// Withdraw the caller's claimable balance for `asset`.
    ///
    /// The balance is zeroed before the outbound transfer. A zero balance
    /// is a no-op, not an error.
    pub fn refund(env: Env, account: Address, asset: BidAsset) -> Result<(), Error> {
        account.require_auth();

        let amount = storage::get_refund(&env, &account, &asset);
        if amount == 0 {
            return Ok(());
        }

        storage::clear_refund(&env, &account, &asset);
        let token = payment_token(&env, &asset)?;
        token::TokenClient::new(&env, &token).transfer(
            &env.current_contract_address(),
            &account,
            &amount,
        );
        extend_instance_ttl(&env);

        RefundWithdrawnEventData {
            account,
            asset,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // PRICE FEED REGISTRY
    // ========================================================================

    /// Register (or overwrite) the price feed for `asset` (admin only).
    pub fn set_feed(env: Env, admin: Address, asset: BidAsset, feed: Address) -> Result<(), Error> {
        admin.require_auth();
        require_admin(&env, &admin)?;

        storage::set_feed(&env, &asset, &feed);
        extend_instance_ttl(&env);

        FeedSetEventData { asset, feed }.publish(&env);

        Ok(())
    }

    /// Feed contract registered for `asset`, if any.
    pub fn get_feed(env: Env, asset: BidAsset) -> Option<Address> {
        storage::get_feed(&env, &asset)
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Settle an ended auction. Permissionless.
    ///
    /// With a winner, the asset moves seller to winner and the highest bid
    /// moves from engine custody to the seller, denominated in the winning
    /// bid's asset. With no bids nothing moves. Either way the record is
    /// marked settled, terminally.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - No record under this key
    /// * `Error::AlreadySettled` - Second settlement of the same record
    /// * `Error::AuctionNotEnded` - The bidding window is still open
    pub fn settle_auction(env: Env, asset_contract: Address, asset_id: u64) -> Result<(), Error> {
        let mut auction = load_auction(&env, &asset_contract, asset_id)?;
        if auction.settled {
            return Err(Error::AlreadySettled);
        }
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotEnded);
        }

        if let Some(winner) = auction.highest_bidder.clone() {
            let engine = env.current_contract_address();
            NftClient::new(&env, &asset_contract).transfer_from(
                &engine,
                &auction.seller,
                &winner,
                &asset_id,
            );
            let token = payment_token(&env, &auction.bidding_asset)?;
            token::TokenClient::new(&env, &token).transfer(
                &engine,
                &auction.seller,
                &auction.highest_bid,
            );
        }

        auction.settled = true;
        storage::save_auction(&env, &auction);
        extend_instance_ttl(&env);

        AuctionSettledEventData {
            asset_contract,
            asset_id,
            winner: auction.highest_bidder,
            amount: auction.highest_bid,
        }
        .publish(&env);

        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn load_auction(env: &Env, asset_contract: &Address, asset_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, asset_contract, asset_id).ok_or(Error::AuctionNotFound)
}

fn check_bid_window(env: &Env, auction: &Auction) -> Result<(), Error> {
    if auction.settled {
        return Err(Error::AlreadySettled);
    }
    let now = env.ledger().timestamp();
    if now < auction.start_time {
        return Err(Error::AuctionNotStarted);
    }
    if now > auction.end_time {
        return Err(Error::AuctionEnded);
    }
    Ok(())
}

/// Value an accepted bid must strictly exceed.
fn acceptance_threshold(auction: &Auction) -> i128 {
    auction.highest_bid.max(auction.start_price)
}

/// Token contract that moves funds for `asset`.
fn payment_token(env: &Env, asset: &BidAsset) -> Result<Address, Error> {
    match asset {
        BidAsset::Native => storage::get_native_token(env).ok_or(Error::NotInitialized),
        BidAsset::Token(token) => Ok(token.clone()),
    }
}

/// Pull `amount` of `asset` from `bidder` into engine custody.
///
/// Returns false when a token contract reports the transfer failed; the
/// lead must not be touched in that case.
fn collect_funds(env: &Env, asset: &BidAsset, bidder: &Address, amount: i128) -> Result<bool, Error> {
    let engine = env.current_contract_address();
    match asset {
        BidAsset::Native => {
            let token = storage::get_native_token(env).ok_or(Error::NotInitialized)?;
            token::TokenClient::new(env, &token).transfer(bidder, &engine, &amount);
            Ok(true)
        }
        BidAsset::Token(token) => {
            let outcome = token::TokenClient::new(env, token)
                .try_transfer_from(&engine, bidder, &engine, &amount);
            Ok(matches!(outcome, Ok(Ok(()))))
        }
    }
}

/// Credit the current leader's stake to the refund ledger. Additive: an
/// account outbid repeatedly accumulates until it withdraws.
fn credit_outbid(env: &Env, auction: &Auction) {
    if let Some(previous) = &auction.highest_bidder {
        storage::add_refund(env, previous, &auction.bidding_asset, auction.highest_bid);
        RefundCreditedEventData {
            account: previous.clone(),
            asset: auction.bidding_asset.clone(),
            amount: auction.highest_bid,
        }
        .publish(env);
    }
}

/// Push the current leader's stake back by synchronous transfer. Runs
/// before the auction record is rewritten; the ordering is observable
/// behavior of the `bidding` entrypoint.
fn push_outbid(env: &Env, auction: &Auction) -> Result<(), Error> {
    if let Some(previous) = &auction.highest_bidder {
        let token = payment_token(env, &auction.bidding_asset)?;
        token::TokenClient::new(env, &token).transfer(
            &env.current_contract_address(),
            previous,
            &auction.highest_bid,
        );
        RefundPushedEventData {
            account: previous.clone(),
            asset: auction.bidding_asset.clone(),
            amount: auction.highest_bid,
        }
        .publish(env);
    }
    Ok(())
}

/// Install a new lead and persist the record.
fn apply_lead(env: &Env, auction: &mut Auction, bidder: &Address, amount: i128, asset: BidAsset) {
    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    auction.bidding_asset = asset.clone();
    storage::save_auction(env, auction);

    BidPlacedEventData {
        asset_contract: auction.asset_contract.clone(),
        asset_id: auction.asset_id,
        bidder: bidder.clone(),
        amount,
        asset,
    }
    .publish(env);
}

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
