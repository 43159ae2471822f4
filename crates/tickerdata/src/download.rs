//! Multi-symbol fan-out.
//!
//! [`fetch_all`] launches one asynchronous fetch per distinct input symbol,
//! waits for every one of them, and collects a per-symbol outcome map. This
//! is a "wait for all, fail none globally" join: one symbol's failure is
//! captured as that symbol's map entry and never aborts or alters another
//! symbol's fetch. Cancelling the umbrella future (dropping it, or racing it
//! against a timeout) drops every still-pending per-symbol fetch; completed
//! entries are discarded with it.

use std::collections::HashMap;
use std::future::Future;

use futures::future::join_all;
use tracing::debug;

use tickerdata_core::{Result, Symbol};

#[cfg(feature = "yahoo")]
use tickerdata_core::{HistoricalSeries, Interval, Range};
#[cfg(feature = "yahoo")]
use tickerdata_yahoo::YahooClient;

/// Runs one fetch per distinct input symbol concurrently and collects every
/// outcome.
///
/// The returned map holds exactly one entry per distinct input symbol - a
/// failed fetch contributes its error as that symbol's entry. Empty input
/// yields an empty map. No iteration-order guarantee is made.
pub async fn fetch_all<T, F, Fut>(symbols: &[Symbol], op: F) -> HashMap<Symbol, Result<T>>
where
    F: Fn(Symbol) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut unique: Vec<Symbol> = Vec::new();
    for symbol in symbols {
        if !unique.contains(symbol) {
            unique.push(symbol.clone());
        }
    }

    debug!("Fanning out over {} symbols", unique.len());

    let fetches = unique.into_iter().map(|symbol| {
        let fut = op(symbol.clone());
        async move { (symbol, fut.await) }
    });

    join_all(fetches).await.into_iter().collect()
}

/// Builder for downloading price history across many symbols at once.
#[cfg(feature = "yahoo")]
#[derive(Clone, Debug, Default)]
pub struct DownloadBuilder {
    symbols: Vec<Symbol>,
    range: Range,
    interval: Interval,
}

#[cfg(feature = "yahoo")]
impl DownloadBuilder {
    /// Creates a builder with no symbols, the default range and daily bars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Adds several symbols.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Sets the relative time window.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the sampling granularity.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Fetches history for every symbol concurrently.
    pub async fn run(&self, client: &YahooClient) -> HashMap<Symbol, Result<HistoricalSeries>> {
        let (range, interval) = (self.range, self.interval);
        fetch_all(&self.symbols, move |symbol| async move {
            client.history(&symbol, range, interval).await
        })
        .await
    }
}
