//! Company profile entities.
//!
//! [`TickerInfo`] is the full flat record assembled from the quote summary
//! modules; every field may be absent. [`FastInfo`] is a small projection of
//! it for callers that only need the handful of headline figures - it is
//! derived from an already-fetched [`TickerInfo`], never from a separate
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// Full company/instrument profile assembled from the quote summary modules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Short display name.
    pub short_name: Option<String>,
    /// Long display name.
    pub long_name: Option<String>,
    /// Instrument kind as reported (e.g. `"EQUITY"`, `"ETF"`).
    pub quote_type: Option<String>,
    /// Exchange display name.
    pub exchange: Option<String>,
    /// Trading currency.
    pub currency: Option<String>,

    // Profile
    /// Business sector.
    pub sector: Option<String>,
    /// Industry within the sector.
    pub industry: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// Country of incorporation.
    pub country: Option<String>,
    /// Headquarters city.
    pub city: Option<String>,
    /// Full-time employee count.
    pub employees: Option<u64>,
    /// Business description.
    pub business_summary: Option<String>,

    // Valuation
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Enterprise value.
    pub enterprise_value: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Forward price-to-earnings ratio.
    pub forward_pe: Option<f64>,
    /// Price-to-book ratio.
    pub price_to_book: Option<f64>,
    /// Trailing twelve-month price-to-sales ratio.
    pub price_to_sales: Option<f64>,
    /// Price/earnings-to-growth ratio.
    pub peg_ratio: Option<f64>,
    /// Trailing earnings per share.
    pub trailing_eps: Option<f64>,
    /// Forward earnings per share.
    pub forward_eps: Option<f64>,

    // Dividends
    /// Annual dividend rate.
    pub dividend_rate: Option<f64>,
    /// Dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Dividend payout ratio.
    pub payout_ratio: Option<f64>,

    // Price & risk
    /// Beta coefficient.
    pub beta: Option<f64>,
    /// Last regular-market price.
    pub regular_market_price: Option<f64>,
    /// Timestamp of the last regular-market quote.
    pub regular_market_time: Option<i64>,
    /// Previous session close.
    pub previous_close: Option<f64>,
    /// 52-week high price.
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low price.
    pub fifty_two_week_low: Option<f64>,
    /// 52-week price change as a fraction.
    pub fifty_two_week_change: Option<f64>,
    /// 50-day moving average.
    pub fifty_day_average: Option<f64>,
    /// 200-day moving average.
    pub two_hundred_day_average: Option<f64>,
    /// Average daily volume.
    pub average_volume: Option<u64>,

    // Shares
    /// Shares outstanding.
    pub shares_outstanding: Option<u64>,
    /// Free-floating shares.
    pub float_shares: Option<u64>,
}

impl TickerInfo {
    /// Creates an all-absent profile for a symbol.
    #[must_use]
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            ..Default::default()
        }
    }
}

/// Headline figures projected from a [`TickerInfo`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FastInfo {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Last regular-market price.
    pub last_price: Option<f64>,
    /// Previous session close.
    pub previous_close: Option<f64>,
    /// Trading currency.
    pub currency: Option<String>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// 52-week high price.
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low price.
    pub fifty_two_week_low: Option<f64>,
    /// 52-week price change as a fraction.
    pub year_change_pct: Option<f64>,
    /// Shares outstanding.
    pub shares: Option<u64>,
}

impl From<&TickerInfo> for FastInfo {
    fn from(info: &TickerInfo) -> Self {
        Self {
            symbol: info.symbol.clone(),
            last_price: info.regular_market_price,
            previous_close: info.previous_close,
            currency: info.currency.clone(),
            market_cap: info.market_cap,
            fifty_two_week_high: info.fifty_two_week_high,
            fifty_two_week_low: info.fifty_two_week_low,
            year_change_pct: info.fifty_two_week_change,
            shares: info.shares_outstanding,
        }
    }
}
