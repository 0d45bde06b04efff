use soroban_sdk::{contractclient, Env};

/// Interface of a price feed contract reporting the USD price of one unit
/// of its asset as a fixed-point integer with `decimals` places.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Latest reported price and the feed's decimal places.
    fn latest_price(env: Env) -> (i128, u32);
}
