use soroban_sdk::Env;

use crate::errors::Error;
use crate::feed::PriceFeedClient;
use crate::storage;
use crate::types::BidAsset;

/// Price of one unit of `asset` from its registered feed.
///
/// Absence of a feed is a hard rejection, never a default.
pub fn price_of(e: &Env, asset: &BidAsset) -> Result<(i128, u32), Error> {
    let feed = storage::get_feed(e, asset).ok_or(Error::TokenNotSupported)?;
    Ok(PriceFeedClient::new(e, &feed).latest_price())
}

/// USD-scaled value of `amount` of `asset`: `amount * price / 10^decimals`.
pub fn normalized_value(e: &Env, asset: &BidAsset, amount: i128) -> Result<i128, Error> {
    let (price, decimals) = price_of(e, asset)?;
    let scale = 10i128.checked_pow(decimals).ok_or(Error::Overflow)?;
    amount
        .checked_mul(price)
        .and_then(|value| value.checked_div(scale))
        .ok_or(Error::Overflow)
}
