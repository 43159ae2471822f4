//! Price history and corporate-event operations (chart endpoint).
//!
//! The chart response is heavily optional: any indicator array, any leaf
//! within one, and the event maps may all be absent. Decoding preserves that
//! optionality; mapping resolves it - a present-but-null leaf becomes an
//! absent domain field, never zero.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{
    CapitalGain, CorporateAction, Dividend, FetchError, HistoricalSeries, Interval, Quote, Range,
    Result, Split, Symbol, view,
};

use crate::client::{ApiError, YahooClient, validate_symbol};
use crate::urls;

impl YahooClient {
    /// Fetches price history for a symbol over a relative range.
    ///
    /// Bars are returned in arrival order; a symbol with no data in range
    /// yields an empty series, not an error.
    pub async fn history(
        &self,
        symbol: &Symbol,
        range: Range,
        interval: Interval,
    ) -> Result<HistoricalSeries> {
        let response = self.fetch_chart(symbol, range, interval, None).await?;
        map_series(symbol, response)
    }

    /// Fetches price history restricted to an explicit inclusive timestamp
    /// range.
    ///
    /// This is the unrestricted [`Range::Max`] history followed by a local
    /// inclusive filter; no separate endpoint exists for arbitrary ranges.
    pub async fn history_between(
        &self,
        symbol: &Symbol,
        start: i64,
        end: i64,
        interval: Interval,
    ) -> Result<HistoricalSeries> {
        if start > end {
            return Err(FetchError::InvalidParameter(format!(
                "start {start} is after end {end}"
            )));
        }
        let series = self.history(symbol, Range::Max, interval).await?;
        let quotes = view::filter_by_range(&series.quotes, start, end);
        Ok(HistoricalSeries::new(
            series.symbol,
            quotes,
            series.currency,
        ))
    }

    /// Fetches dividend payments over a relative range, ascending by date.
    pub async fn dividends(&self, symbol: &Symbol, range: Range) -> Result<Vec<Dividend>> {
        let response = self
            .fetch_chart(symbol, range, Interval::OneDay, Some("div"))
            .await?;
        map_dividends(symbol, response)
    }

    /// Fetches stock splits over a relative range, ascending by date.
    pub async fn splits(&self, symbol: &Symbol, range: Range) -> Result<Vec<Split>> {
        let response = self
            .fetch_chart(symbol, range, Interval::OneDay, Some("splits"))
            .await?;
        map_splits(symbol, response)
    }

    /// Fetches capital gain distributions over a relative range, ascending by
    /// date.
    ///
    /// Equities naturally yield an empty list; funds yield distribution rows.
    pub async fn capital_gains(&self, symbol: &Symbol, range: Range) -> Result<Vec<CapitalGain>> {
        let response = self
            .fetch_chart(symbol, range, Interval::OneDay, Some("capitalGains"))
            .await?;
        map_capital_gains(symbol, response)
    }

    /// Fetches the merged corporate-action view over a relative range.
    ///
    /// Composite of [`dividends`](Self::dividends) and
    /// [`splits`](Self::splits): both succeed and the lists merge into one
    /// chronological view; either failure propagates verbatim, dividends'
    /// failure first when both fail.
    pub async fn actions(&self, symbol: &Symbol, range: Range) -> Result<Vec<CorporateAction>> {
        let (dividends, splits) =
            tokio::join!(self.dividends(symbol, range), self.splits(symbol, range));
        Ok(merge_actions(dividends?, splits?))
    }

    async fn fetch_chart(
        &self,
        symbol: &Symbol,
        range: Range,
        interval: Interval,
        events: Option<&str>,
    ) -> Result<ChartResponse> {
        validate_symbol(symbol)?;
        let url = urls::chart_url(&self.base_urls().chart, symbol, range, interval, events);
        self.get_json(&url, symbol).await
    }
}

/// Merges event lists into one view sorted ascending by timestamp.
pub(crate) fn merge_actions(dividends: Vec<Dividend>, splits: Vec<Split>) -> Vec<CorporateAction> {
    let merged: Vec<CorporateAction> = dividends
        .into_iter()
        .map(CorporateAction::Dividend)
        .chain(splits.into_iter().map(CorporateAction::Split))
        .collect();
    view::sorted_ascending(&merged)
}

/// Applies the result/error envelope rule shared by every chart operation:
/// an explicit error object wins, an absent result collection means the
/// symbol has nothing upstream, and an empty collection is a legal empty
/// answer.
fn take_result(response: ChartResponse, symbol: &Symbol) -> Result<Option<ChartResult>> {
    let envelope = response.chart;
    if let Some(error) = envelope.error {
        return Err(error.into_upstream());
    }
    match envelope.result {
        None => Err(FetchError::SymbolNotFound(symbol.to_string())),
        Some(results) => Ok(results.into_iter().next()),
    }
}

fn map_series(symbol: &Symbol, response: ChartResponse) -> Result<HistoricalSeries> {
    let Some(result) = take_result(response, symbol)? else {
        return Ok(HistoricalSeries::new(symbol.clone(), Vec::new(), None));
    };

    let currency = result.meta.as_ref().and_then(|m| m.currency.clone());
    let timestamps = result.timestamp.unwrap_or_default();

    let (quote_block, adjclose_block) = match result.indicators {
        Some(indicators) => (
            indicators.quote.unwrap_or_default().into_iter().next(),
            indicators
                .adjclose
                .unwrap_or_default()
                .into_iter()
                .next()
                .and_then(|b| b.adjclose),
        ),
        None => (None, None),
    };

    let quotes = timestamps
        .iter()
        .enumerate()
        .map(|(i, &timestamp)| Quote {
            timestamp,
            open: leaf(quote_block.as_ref().and_then(|q| q.open.as_ref()), i),
            high: leaf(quote_block.as_ref().and_then(|q| q.high.as_ref()), i),
            low: leaf(quote_block.as_ref().and_then(|q| q.low.as_ref()), i),
            close: leaf(quote_block.as_ref().and_then(|q| q.close.as_ref()), i),
            adjusted_close: leaf(adjclose_block.as_ref(), i),
            volume: leaf(quote_block.as_ref().and_then(|q| q.volume.as_ref()), i),
        })
        .collect();

    Ok(HistoricalSeries::new(symbol.clone(), quotes, currency))
}

/// Reads position `i` of an optional indicator array; an absent array and a
/// null leaf both map to an absent field.
fn leaf<T: Copy>(array: Option<&Vec<Option<T>>>, i: usize) -> Option<T> {
    array.and_then(|v| v.get(i).copied().flatten())
}

fn map_dividends(symbol: &Symbol, response: ChartResponse) -> Result<Vec<Dividend>> {
    let Some(result) = take_result(response, symbol)? else {
        return Ok(Vec::new());
    };

    let rows = result
        .events
        .and_then(|e| e.dividends)
        .unwrap_or_default();

    let mut dividends: Vec<Dividend> = rows
        .into_values()
        .filter_map(|row| match (row.date, row.amount) {
            (Some(timestamp), Some(amount)) => Some(Dividend { timestamp, amount }),
            _ => {
                warn!("Skipping dividend row without date or amount for {}", symbol);
                None
            }
        })
        .collect();
    dividends.sort_by_key(|d| d.timestamp);
    Ok(dividends)
}

fn map_splits(symbol: &Symbol, response: ChartResponse) -> Result<Vec<Split>> {
    let Some(result) = take_result(response, symbol)? else {
        return Ok(Vec::new());
    };

    let rows = result.events.and_then(|e| e.splits).unwrap_or_default();

    let mut splits: Vec<Split> = rows
        .into_values()
        .filter_map(|row| {
            // Ratio is derived from the numeric pair once, here; the display
            // string is never consulted again.
            match (row.date, row.numerator, row.denominator) {
                (Some(timestamp), Some(numerator), Some(denominator)) if denominator != 0.0 => {
                    Some(Split {
                        timestamp,
                        ratio: numerator / denominator,
                    })
                }
                _ => {
                    warn!("Skipping split row with incomplete ratio for {}", symbol);
                    None
                }
            }
        })
        .collect();
    splits.sort_by_key(|s| s.timestamp);
    Ok(splits)
}

fn map_capital_gains(symbol: &Symbol, response: ChartResponse) -> Result<Vec<CapitalGain>> {
    let Some(result) = take_result(response, symbol)? else {
        return Ok(Vec::new());
    };

    let rows = result
        .events
        .and_then(|e| e.capital_gains)
        .unwrap_or_default();

    let mut gains: Vec<CapitalGain> = rows
        .into_values()
        .filter_map(|row| match (row.date, row.amount) {
            (Some(timestamp), Some(gain)) => Some(CapitalGain { timestamp, gain }),
            _ => {
                warn!("Skipping capital gain row without date or amount for {}", symbol);
                None
            }
        })
        .collect();
    gains.sort_by_key(|g| g.timestamp);
    Ok(gains)
}

// ============================================================================
// Chart API Response Types
// ============================================================================

/// Chart API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    events: Option<ChartEvents>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartEvents {
    dividends: Option<HashMap<String, DividendRow>>,
    splits: Option<HashMap<String, SplitRow>>,
    capital_gains: Option<HashMap<String, CapitalGainRow>>,
}

#[derive(Debug, Deserialize)]
struct DividendRow {
    date: Option<i64>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SplitRow {
    date: Option<i64>,
    numerator: Option<f64>,
    denominator: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CapitalGainRow {
    date: Option<i64>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Option<Vec<QuoteBlock>>,
    adjclose: Option<Vec<AdjCloseBlock>>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    adjclose: Option<Vec<Option<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::new("AAPL")
    }

    #[test]
    fn empty_result_array_maps_to_an_empty_series() {
        let response: ChartResponse =
            serde_json::from_str(r#"{"chart":{"result":[],"error":null}}"#).unwrap();
        let series = map_series(&symbol(), response).unwrap();
        assert_eq!(series.symbol.as_str(), "AAPL");
        assert!(series.is_empty());
    }

    #[test]
    fn null_result_without_an_error_object_is_an_unknown_symbol() {
        let response: ChartResponse =
            serde_json::from_str(r#"{"chart":{"result":null,"error":null}}"#).unwrap();
        assert!(matches!(
            map_series(&symbol(), response),
            Err(FetchError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn explicit_error_object_wins_over_the_missing_result() {
        let response: ChartResponse = serde_json::from_str(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        )
        .unwrap();
        match map_series(&symbol(), response) {
            Err(FetchError::Upstream { code, .. }) => assert_eq!(code, "Not Found"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn null_leaves_become_absent_fields_not_zero() {
        let response: ChartResponse = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "meta": {"currency": "USD", "symbol": "AAPL"},
                        "timestamp": [1700000000, 1700086400],
                        "indicators": {
                            "quote": [{
                                "open": [189.9, null],
                                "high": [191.0, null],
                                "low": [189.2, null],
                                "close": [190.4, null],
                                "volume": [52000000, null]
                            }],
                            "adjclose": [{"adjclose": [190.1, null]}]
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let series = map_series(&symbol(), response).unwrap();
        assert_eq!(series.currency.as_deref(), Some("USD"));
        assert_eq!(series.len(), 2);
        assert_eq!(series.quotes[0].close, Some(190.4));
        assert_eq!(series.quotes[0].volume, Some(52_000_000));

        // The second bar is a gap bar: present-but-null everywhere.
        let gap = &series.quotes[1];
        assert_eq!(gap.timestamp, 1_700_086_400);
        assert!(gap.open.is_none() && gap.close.is_none() && gap.volume.is_none());
        assert!(gap.adjusted_close.is_none());
    }

    #[test]
    fn missing_indicator_arrays_yield_gap_bars() {
        let response: ChartResponse = serde_json::from_str(
            r#"{"chart":{"result":[{"timestamp":[1700000000],"indicators":{"quote":[{}]}}],"error":null}}"#,
        )
        .unwrap();
        let series = map_series(&symbol(), response).unwrap();
        assert_eq!(series.len(), 1);
        assert!(series.quotes[0].open.is_none());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let response: ChartResponse = serde_json::from_str(
            r#"{"chart":{"result":[{"meta":{"currency":"USD","newField":1},"timestamp":[],"futureBlock":{"x":true}}],"error":null}}"#,
        )
        .unwrap();
        assert!(map_series(&symbol(), response).unwrap().is_empty());
    }

    #[test]
    fn split_ratio_is_derived_from_the_numeric_pair() {
        let response: ChartResponse = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1598832000],
                        "events": {
                            "splits": {
                                "1598832000": {
                                    "date": 1598832000,
                                    "numerator": 4,
                                    "denominator": 1,
                                    "splitRatio": "4:1"
                                }
                            }
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let splits = map_splits(&symbol(), response).unwrap();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].ratio, 4.0);
        assert!(splits[0].is_forward());
        assert!(!splits[0].is_reverse());
    }

    #[test]
    fn dividends_come_back_sorted_ascending() {
        let response: ChartResponse = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "events": {
                            "dividends": {
                                "1707000000": {"date": 1707000000, "amount": 0.24},
                                "1699000000": {"date": 1699000000, "amount": 0.24},
                                "1691000000": {"date": 1691000000, "amount": 0.23}
                            }
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let dividends = map_dividends(&symbol(), response).unwrap();
        let timestamps: Vec<i64> = dividends.iter().map(|d| d.timestamp).collect();
        assert_eq!(
            timestamps,
            vec![1_691_000_000, 1_699_000_000, 1_707_000_000]
        );
        assert_eq!(dividends[0].amount, 0.23);
    }

    #[test]
    fn incomplete_event_rows_are_skipped() {
        let response: ChartResponse = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "events": {
                            "dividends": {
                                "1": {"date": 1, "amount": 0.2},
                                "2": {"date": null, "amount": 0.2},
                                "3": {"date": 3}
                            }
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();
        let dividends = map_dividends(&symbol(), response).unwrap();
        assert_eq!(dividends.len(), 1);
        assert_eq!(dividends[0].timestamp, 1);
    }

    #[test]
    fn merged_actions_are_chronological() {
        let dividends = vec![
            Dividend {
                timestamp: 10,
                amount: 0.2,
            },
            Dividend {
                timestamp: 30,
                amount: 0.22,
            },
        ];
        let splits = vec![Split {
            timestamp: 20,
            ratio: 2.0,
        }];

        let actions = merge_actions(dividends, splits);
        let timestamps: Vec<i64> = actions.iter().map(CorporateAction::timestamp).collect();
        assert_eq!(timestamps, vec![10, 20, 30]);
        assert!(matches!(actions[1], CorporateAction::Split(_)));
    }

    #[test]
    fn empty_result_array_maps_to_empty_event_lists() {
        let response: ChartResponse =
            serde_json::from_str(r#"{"chart":{"result":[],"error":null}}"#).unwrap();
        assert!(map_splits(&symbol(), response).unwrap().is_empty());
    }
}
