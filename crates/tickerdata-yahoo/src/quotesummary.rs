//! Shared quote-summary plumbing.
//!
//! Every quote-summary operation requests a module list and receives the
//! same envelope; this module holds the envelope, the `{raw, fmt}` pair
//! types, and the single fetch path that applies the result/error rule.
//!
//! Numeric leaves arrive as `{"raw": <machine value>, "fmt": "<display>"}`
//! pairs (or as empty objects when the upstream has no value); only `raw` is
//! extracted, the display string is discarded.

use serde::Deserialize;

use tickerdata_core::{FetchError, Result, Symbol};

use crate::analysis::{EsgScoresModule, UpgradeDowngradeModule};
use crate::client::{ApiError, YahooClient, validate_symbol};
use crate::fundamentals::{
    BalanceSheetHistoryModule, CalendarEventsModule, CashflowHistoryModule, EarningsHistoryModule,
    EarningsModule, IncomeStatementHistoryModule,
};
use crate::holders::{
    InsiderHoldersModule, InsiderTransactionsModule, MajorHoldersModule, OwnershipModule,
};
use crate::profile::{KeyStatisticsModule, PriceModule, SummaryDetailModule, SummaryProfileModule};
use crate::urls;

/// A `{raw, fmt}` numeric pair; only the machine value is kept.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub(crate) struct RawNum {
    pub(crate) raw: Option<f64>,
}

/// A `{raw, fmt}` integer pair; only the machine value is kept.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub(crate) struct RawInt {
    pub(crate) raw: Option<i64>,
}

/// Unwraps an optional numeric pair to its machine value.
pub(crate) fn num(pair: Option<RawNum>) -> Option<f64> {
    pair.and_then(|p| p.raw)
}

/// Unwraps an optional integer pair to its machine value.
pub(crate) fn int(pair: Option<RawInt>) -> Option<i64> {
    pair.and_then(|p| p.raw)
}

/// Unwraps an optional integer pair to an unsigned machine value.
pub(crate) fn uint(pair: Option<RawInt>) -> Option<u64> {
    int(pair).and_then(|v| u64::try_from(v).ok())
}

/// One symbol's module bundle from the quote summary endpoint.
///
/// Each field mirrors one requested module; modules that were not requested
/// (or that the upstream has no data for) are simply absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModuleBundle {
    pub(crate) price: Option<PriceModule>,
    pub(crate) summary_profile: Option<SummaryProfileModule>,
    pub(crate) summary_detail: Option<SummaryDetailModule>,
    pub(crate) default_key_statistics: Option<KeyStatisticsModule>,
    pub(crate) calendar_events: Option<CalendarEventsModule>,
    pub(crate) earnings: Option<EarningsModule>,
    pub(crate) earnings_history: Option<EarningsHistoryModule>,
    pub(crate) upgrade_downgrade_history: Option<UpgradeDowngradeModule>,
    pub(crate) esg_scores: Option<EsgScoresModule>,
    pub(crate) major_holders_breakdown: Option<MajorHoldersModule>,
    pub(crate) institution_ownership: Option<OwnershipModule>,
    pub(crate) fund_ownership: Option<OwnershipModule>,
    pub(crate) insider_transactions: Option<InsiderTransactionsModule>,
    pub(crate) insider_holders: Option<InsiderHoldersModule>,
    pub(crate) income_statement_history: Option<IncomeStatementHistoryModule>,
    pub(crate) income_statement_history_quarterly: Option<IncomeStatementHistoryModule>,
    pub(crate) balance_sheet_history: Option<BalanceSheetHistoryModule>,
    pub(crate) balance_sheet_history_quarterly: Option<BalanceSheetHistoryModule>,
    pub(crate) cashflow_statement_history: Option<CashflowHistoryModule>,
    pub(crate) cashflow_statement_history_quarterly: Option<CashflowHistoryModule>,
}

/// Quote summary API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteSummaryResponse {
    quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    result: Option<Vec<ModuleBundle>>,
    error: Option<ApiError>,
}

/// Fetches a module list for a symbol and applies the envelope rule.
///
/// `Ok(None)` means the result collection was present but empty - the caller
/// maps that to its empty/all-absent domain entity.
pub(crate) async fn fetch_modules(
    client: &YahooClient,
    symbol: &Symbol,
    modules: &str,
) -> Result<Option<ModuleBundle>> {
    validate_symbol(symbol)?;
    let url = urls::quote_summary_url(&client.base_urls().quote_summary, symbol, modules);
    let response: QuoteSummaryResponse = client.get_json(&url, symbol).await?;
    take_bundle(response, symbol)
}

pub(crate) fn take_bundle(
    response: QuoteSummaryResponse,
    symbol: &Symbol,
) -> Result<Option<ModuleBundle>> {
    let envelope = response.quote_summary;
    if let Some(error) = envelope.error {
        return Err(error.into_upstream());
    }
    match envelope.result {
        None => Err(FetchError::SymbolNotFound(symbol.to_string())),
        Some(results) => Ok(results.into_iter().next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pair_extracts_only_the_machine_value() {
        let pair: RawNum = serde_json::from_str(r#"{"raw": 150.25, "fmt": "150.25"}"#).unwrap();
        assert_eq!(pair.raw, Some(150.25));
    }

    #[test]
    fn empty_object_pair_is_an_absent_value() {
        let pair: RawNum = serde_json::from_str("{}").unwrap();
        assert_eq!(pair.raw, None);

        let pair: RawNum = serde_json::from_str(r#"{"raw": null, "fmt": null}"#).unwrap();
        assert_eq!(pair.raw, None);
    }

    #[test]
    fn uint_rejects_negative_values() {
        assert_eq!(uint(Some(RawInt { raw: Some(-1) })), None);
        assert_eq!(uint(Some(RawInt { raw: Some(42) })), Some(42));
        assert_eq!(uint(None), None);
    }

    #[test]
    fn null_result_is_an_unknown_symbol() {
        let response: QuoteSummaryResponse =
            serde_json::from_str(r#"{"quoteSummary":{"result":null,"error":null}}"#).unwrap();
        assert!(matches!(
            take_bundle(response, &Symbol::new("NOSUCH")),
            Err(FetchError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn empty_result_is_a_legal_empty_bundle() {
        let response: QuoteSummaryResponse =
            serde_json::from_str(r#"{"quoteSummary":{"result":[],"error":null}}"#).unwrap();
        assert!(take_bundle(response, &Symbol::new("AAPL")).unwrap().is_none());
    }

    #[test]
    fn explicit_error_payload_is_upstream() {
        let response: QuoteSummaryResponse = serde_json::from_str(
            r#"{"quoteSummary":{"result":null,"error":{"code":"Unauthorized","description":"Invalid Crumb"}}}"#,
        )
        .unwrap();
        match take_bundle(response, &Symbol::new("AAPL")) {
            Err(FetchError::Upstream { code, message }) => {
                assert_eq!(code, "Unauthorized");
                assert_eq!(message, "Invalid Crumb");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn unknown_modules_are_tolerated() {
        let response: QuoteSummaryResponse = serde_json::from_str(
            r#"{"quoteSummary":{"result":[{"futureModule":{"x":1},"price":{"currency":"USD"}}],"error":null}}"#,
        )
        .unwrap();
        let bundle = take_bundle(response, &Symbol::new("AAPL")).unwrap().unwrap();
        assert!(bundle.price.is_some());
    }
}
