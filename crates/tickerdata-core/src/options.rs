//! Option contract and option chain entities.

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// One listed option contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// OCC-style contract symbol.
    pub contract_symbol: String,
    /// Strike price.
    pub strike: f64,
    /// Expiration timestamp, seconds since the Unix epoch.
    pub expiration: i64,
    /// Trading currency.
    pub currency: Option<String>,
    /// Last traded price.
    pub last_price: Option<f64>,
    /// Best bid.
    pub bid: Option<f64>,
    /// Best ask.
    pub ask: Option<f64>,
    /// Session volume.
    pub volume: Option<u64>,
    /// Open interest.
    pub open_interest: Option<u64>,
    /// Implied volatility as a fraction.
    pub implied_volatility: Option<f64>,
    /// Whether the contract is in the money.
    pub in_the_money: Option<bool>,
}

/// Calls and puts for one expiration.
///
/// Calls and puts are independently orderable by strike; a given strike may
/// appear in one, both, or neither list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    /// Expiration timestamp, seconds since the Unix epoch.
    pub expiration: i64,
    /// Call contracts.
    pub calls: Vec<OptionContract>,
    /// Put contracts.
    pub puts: Vec<OptionContract>,
    /// Underlying symbol as reported.
    pub underlying_symbol: Option<String>,
    /// Last price of the underlying.
    pub underlying_price: Option<f64>,
}

/// Available option expirations for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpirationDates {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Expiration timestamps, seconds since the Unix epoch.
    pub expirations: Vec<i64>,
}
