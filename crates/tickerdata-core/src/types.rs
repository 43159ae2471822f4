//! Core price and corporate-action types.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`Quote`] - one OHLCV observation at a timestamp
//! - [`HistoricalSeries`] - a symbol's quotes as returned by the upstream
//! - [`Dividend`], [`Split`], [`CapitalGain`] - corporate events
//! - [`CorporateAction`] - the merged chronological event view
//!
//! All entities are immutable values once constructed: the mapper builds
//! them from a single decoded response and they are never updated in place.
//! Timestamps are seconds since the Unix epoch, matching the wire format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One OHLCV price observation.
///
/// The upstream may omit any numeric field for a given bar; a bar with every
/// numeric field absent is a legal "gap" bar. Only the timestamp is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the bar, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: Option<f64>,
    /// Highest price during the period.
    pub high: Option<f64>,
    /// Lowest price during the period.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Split/dividend adjusted closing price.
    pub adjusted_close: Option<f64>,
    /// Trading volume.
    pub volume: Option<u64>,
}

impl Quote {
    /// Creates a bar with every numeric field absent.
    #[must_use]
    pub const fn gap(timestamp: i64) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close: None,
            adjusted_close: None,
            volume: None,
        }
    }
}

/// A symbol's price history as returned by one chart request.
///
/// Quotes are kept in arrival order; sorting is a derived view, never stored
/// state. The list may be empty when the symbol has no data in range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// Symbol the series belongs to.
    pub symbol: Symbol,
    /// Price bars in arrival order.
    pub quotes: Vec<Quote>,
    /// Trading currency, when the upstream reports one.
    pub currency: Option<String>,
}

impl HistoricalSeries {
    /// Creates a new series.
    #[must_use]
    pub const fn new(symbol: Symbol, quotes: Vec<Quote>, currency: Option<String>) -> Self {
        Self {
            symbol,
            quotes,
            currency,
        }
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// One dividend payment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    /// Ex-dividend timestamp, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Per-share amount.
    pub amount: f64,
}

/// One stock split.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Split timestamp, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Split ratio (numerator / denominator), computed at mapping time.
    pub ratio: f64,
}

impl Split {
    /// Returns true for a forward split (ratio above 1).
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.ratio > 1.0
    }

    /// Returns true for a reverse split (ratio below 1).
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.ratio < 1.0
    }
}

/// One capital gain distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapitalGain {
    /// Distribution timestamp, seconds since the Unix epoch.
    pub timestamp: i64,
    /// Per-share gain.
    pub gain: f64,
}

/// One corporate action in the merged chronological view.
///
/// This is only ever a date-sorted view over the dividend, split and capital
/// gain lists; it is never the primary storage for any of them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CorporateAction {
    /// A dividend payment.
    Dividend(Dividend),
    /// A stock split.
    Split(Split),
    /// A capital gain distribution.
    CapitalGain(CapitalGain),
}

impl CorporateAction {
    /// Returns the timestamp of the underlying event.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        match self {
            Self::Dividend(d) => d.timestamp,
            Self::Split(s) => s.timestamp,
            Self::CapitalGain(g) => g.timestamp,
        }
    }
}
