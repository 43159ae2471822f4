//! Derived-view helpers: sorting, filtering and aggregates.
//!
//! Every function here is pure and allocation-producing: the input list is
//! never mutated and never required to be pre-sorted. Aggregates are defined
//! only over elements that carry the relevant optional field; elements
//! missing it are excluded, not treated as zero.

use crate::types::{CapitalGain, CorporateAction, Dividend, Quote, Split};

/// Anything carrying an epoch-second timestamp.
pub trait Timestamped {
    /// Timestamp of the element, seconds since the Unix epoch.
    fn timestamp(&self) -> i64;
}

impl Timestamped for Quote {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Timestamped for Dividend {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Timestamped for Split {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Timestamped for CapitalGain {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Timestamped for CorporateAction {
    fn timestamp(&self) -> i64 {
        Self::timestamp(self)
    }
}

/// Returns the elements sorted ascending by timestamp.
///
/// The sort is stable: ties keep their original relative order.
#[must_use]
pub fn sorted_ascending<T: Timestamped + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by_key(Timestamped::timestamp);
    out
}

/// Returns the elements sorted descending by timestamp.
///
/// The sort is stable: ties keep their original relative order.
#[must_use]
pub fn sorted_descending<T: Timestamped + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    out
}

/// Keeps elements with `start <= timestamp <= end`, both bounds inclusive.
///
/// Relative order is preserved and the input need not be sorted. An empty
/// result is an empty list, not an error.
#[must_use]
pub fn filter_by_range<T: Timestamped + Clone>(items: &[T], start: i64, end: i64) -> Vec<T> {
    items
        .iter()
        .filter(|item| {
            let ts = item.timestamp();
            start <= ts && ts <= end
        })
        .cloned()
        .collect()
}

/// Sums the per-share amounts of a dividend list.
#[must_use]
pub fn total_amount(dividends: &[Dividend]) -> f64 {
    dividends.iter().map(|d| d.amount).sum()
}

/// Mean volume over the bars that report one.
#[must_use]
pub fn average_volume(quotes: &[Quote]) -> Option<f64> {
    let volumes: Vec<u64> = quotes.iter().filter_map(|q| q.volume).collect();
    if volumes.is_empty() {
        return None;
    }
    Some(volumes.iter().sum::<u64>() as f64 / volumes.len() as f64)
}

/// Highest high over the bars that report one.
#[must_use]
pub fn highest_high(quotes: &[Quote]) -> Option<f64> {
    quotes
        .iter()
        .filter_map(|q| q.high)
        .reduce(f64::max)
}

/// Lowest low over the bars that report one.
#[must_use]
pub fn lowest_low(quotes: &[Quote]) -> Option<f64> {
    quotes
        .iter()
        .filter_map(|q| q.low)
        .reduce(f64::min)
}

/// Simple moving average of closing prices over a window of `k` bars.
///
/// Bars without a close are excluded before windowing. Fewer than `k`
/// closes (or `k == 0`) yields an empty result, not an error and not a
/// padded partial average.
#[must_use]
pub fn moving_average(quotes: &[Quote], k: usize) -> Vec<f64> {
    if k == 0 {
        return Vec::new();
    }
    let closes: Vec<f64> = quotes.iter().filter_map(|q| q.close).collect();
    if closes.len() < k {
        return Vec::new();
    }
    closes
        .windows(k)
        .map(|w| w.iter().sum::<f64>() / k as f64)
        .collect()
}
