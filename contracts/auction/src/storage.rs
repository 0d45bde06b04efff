use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, BidAsset, DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION / CONFIG STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

/// SAC address that moves the native asset
pub fn get_native_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::NativeToken)
}

pub fn set_native_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::NativeToken, token);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get the auction record for (asset contract, asset id)
pub fn get_auction(e: &Env, asset_contract: &Address, asset_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(asset_contract.clone(), asset_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Store the auction record under its (asset contract, asset id) key
pub fn save_auction(e: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.asset_contract.clone(), auction.asset_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// REFUND LEDGER STORAGE
// ============================================================================

/// Claimable balance for (account, asset), defaulting to 0
pub fn get_refund(e: &Env, account: &Address, asset: &BidAsset) -> i128 {
    let key = DataKey::Refund(account.clone(), asset.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            balance
        }
        None => 0,
    }
}

/// Add `amount` to the claimable balance for (account, asset)
pub fn add_refund(e: &Env, account: &Address, asset: &BidAsset, amount: i128) {
    let key = DataKey::Refund(account.clone(), asset.clone());
    let balance = get_refund(e, account, asset) + amount;
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Drop the ledger entry for (account, asset)
pub fn clear_refund(e: &Env, account: &Address, asset: &BidAsset) {
    let key = DataKey::Refund(account.clone(), asset.clone());
    e.storage().persistent().remove(&key);
}

// ============================================================================
// PRICE FEED STORAGE
// ============================================================================

/// Feed contract registered for `asset`
pub fn get_feed(e: &Env, asset: &BidAsset) -> Option<Address> {
    let key = DataKey::Feed(asset.clone());
    let feed = e.storage().persistent().get::<_, Address>(&key);
    if feed.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    feed
}

/// Register (or overwrite) the feed contract for `asset`
pub fn set_feed(e: &Env, asset: &BidAsset, feed: &Address) {
    let key = DataKey::Feed(asset.clone());
    e.storage().persistent().set(&key, feed);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
