//! Request-target construction.
//!
//! Deterministic, side-effect-free builders; operations pick the endpoint
//! family and these functions produce the fully-qualified target.

use tickerdata_core::{Interval, Range, Symbol};

/// Builds a chart request target.
pub(crate) fn chart_url(
    base: &str,
    symbol: &Symbol,
    range: Range,
    interval: Interval,
    events: Option<&str>,
) -> String {
    let mut url = format!(
        "{base}/{symbol}?range={}&interval={}&includeAdjustedClose=true",
        range.as_str(),
        interval.as_str()
    );
    if let Some(events) = events {
        url.push_str("&events=");
        url.push_str(events);
    }
    url
}

/// Builds a quote summary request target for a module list.
pub(crate) fn quote_summary_url(base: &str, symbol: &Symbol, modules: &str) -> String {
    format!("{base}/{symbol}?modules={modules}")
}

/// Builds an options chain request target, optionally pinned to one
/// expiration.
pub(crate) fn options_url(base: &str, symbol: &Symbol, expiration: Option<i64>) -> String {
    match expiration {
        Some(ts) => format!("{base}/{symbol}?date={ts}"),
        None => format!("{base}/{symbol}"),
    }
}

/// Builds a search request target asking for news only.
pub(crate) fn search_url(base: &str, query: &str, news_count: usize) -> String {
    format!("{base}?q={query}&newsCount={news_count}&quotesCount=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_carries_range_interval_and_events() {
        let url = chart_url(
            "https://example.test/v8/finance/chart",
            &Symbol::new("AAPL"),
            Range::OneYear,
            Interval::OneDay,
            Some("div"),
        );
        assert_eq!(
            url,
            "https://example.test/v8/finance/chart/AAPL?range=1y&interval=1d&includeAdjustedClose=true&events=div"
        );
    }

    #[test]
    fn chart_url_omits_events_when_not_requested() {
        let url = chart_url(
            "https://example.test/v8/finance/chart",
            &Symbol::new("AAPL"),
            Range::Max,
            Interval::OneDay,
            None,
        );
        assert!(!url.contains("events="));
        assert!(url.contains("range=max"));
    }

    #[test]
    fn quote_summary_url_lists_the_modules() {
        let url = quote_summary_url(
            "https://example.test/v10/finance/quoteSummary",
            &Symbol::new("MSFT"),
            "price,summaryDetail",
        );
        assert_eq!(
            url,
            "https://example.test/v10/finance/quoteSummary/MSFT?modules=price,summaryDetail"
        );
    }

    #[test]
    fn options_url_pins_the_expiration_when_given() {
        let base = "https://example.test/v7/finance/options";
        assert_eq!(
            options_url(base, &Symbol::new("AAPL"), Some(1_735_257_600)),
            "https://example.test/v7/finance/options/AAPL?date=1735257600"
        );
        assert_eq!(
            options_url(base, &Symbol::new("AAPL"), None),
            "https://example.test/v7/finance/options/AAPL"
        );
    }

    #[test]
    fn search_url_requests_news_only() {
        let url = search_url("https://example.test/v1/finance/search", "AAPL", 8);
        assert_eq!(
            url,
            "https://example.test/v1/finance/search?q=AAPL&newsCount=8&quotesCount=0"
        );
    }
}
