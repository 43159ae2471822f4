//! Option chain operations (options endpoint).
//!
//! The options endpoint serves bare numeric values (no `{raw, fmt}` pairs)
//! and carries its own result/error envelope, handled the same way as the
//! chart endpoint's.

use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{
    ExpirationDates, FetchError, OptionChain, OptionContract, Result, Symbol,
};

use crate::client::{ApiError, YahooClient, validate_symbol};
use crate::urls;

impl YahooClient {
    /// Fetches the available option expirations for a symbol.
    pub async fn options(&self, symbol: &Symbol) -> Result<ExpirationDates> {
        let response = self.fetch_options(symbol, None).await?;
        let Some(result) = take_result(response, symbol)? else {
            return Ok(ExpirationDates {
                symbol: symbol.clone(),
                expirations: Vec::new(),
            });
        };
        Ok(ExpirationDates {
            symbol: symbol.clone(),
            expirations: result.expiration_dates.unwrap_or_default(),
        })
    }

    /// Fetches the option chain for a symbol.
    ///
    /// Without an explicit expiration the upstream serves the nearest one;
    /// with one, that expiration is requested directly.
    pub async fn option_chain(
        &self,
        symbol: &Symbol,
        expiration: Option<i64>,
    ) -> Result<OptionChain> {
        let response = self.fetch_options(symbol, expiration).await?;
        map_chain(symbol, response, expiration)
    }

    async fn fetch_options(
        &self,
        symbol: &Symbol,
        expiration: Option<i64>,
    ) -> Result<OptionsResponse> {
        validate_symbol(symbol)?;
        let url = urls::options_url(&self.base_urls().options, symbol, expiration);
        self.get_json(&url, symbol).await
    }
}

fn take_result(response: OptionsResponse, symbol: &Symbol) -> Result<Option<OptionsResult>> {
    let envelope = response.option_chain;
    if let Some(error) = envelope.error {
        return Err(error.into_upstream());
    }
    match envelope.result {
        None => Err(FetchError::SymbolNotFound(symbol.to_string())),
        Some(results) => Ok(results.into_iter().next()),
    }
}

fn map_chain(
    symbol: &Symbol,
    response: OptionsResponse,
    requested_expiration: Option<i64>,
) -> Result<OptionChain> {
    let Some(result) = take_result(response, symbol)? else {
        return Ok(OptionChain {
            expiration: requested_expiration.unwrap_or_default(),
            ..OptionChain::default()
        });
    };

    let underlying_symbol = result.underlying_symbol;
    let (underlying_price, currency) = match result.quote {
        Some(quote) => (quote.regular_market_price, quote.currency),
        None => (None, None),
    };

    let Some(period) = result.options.unwrap_or_default().into_iter().next() else {
        return Ok(OptionChain {
            expiration: requested_expiration.unwrap_or_default(),
            underlying_symbol,
            underlying_price,
            ..OptionChain::default()
        });
    };

    let expiration = period
        .expiration_date
        .or(requested_expiration)
        .unwrap_or_default();

    let calls = map_contracts(
        symbol,
        period.calls.unwrap_or_default(),
        expiration,
        currency.as_deref(),
    );
    let puts = map_contracts(
        symbol,
        period.puts.unwrap_or_default(),
        expiration,
        currency.as_deref(),
    );

    Ok(OptionChain {
        expiration,
        calls,
        puts,
        underlying_symbol,
        underlying_price,
    })
}

fn map_contracts(
    symbol: &Symbol,
    rows: Vec<ContractRow>,
    period_expiration: i64,
    currency: Option<&str>,
) -> Vec<OptionContract> {
    rows.into_iter()
        .filter_map(|row| {
            // Contract symbol and strike identify the contract; rows missing
            // either cannot be represented.
            match (row.contract_symbol, row.strike) {
                (Some(contract_symbol), Some(strike)) => Some(OptionContract {
                    contract_symbol,
                    strike,
                    expiration: row.expiration.unwrap_or(period_expiration),
                    currency: row.currency.or_else(|| currency.map(str::to_string)),
                    last_price: row.last_price,
                    bid: row.bid,
                    ask: row.ask,
                    volume: row.volume,
                    open_interest: row.open_interest,
                    implied_volatility: row.implied_volatility,
                    in_the_money: row.in_the_money,
                }),
                _ => {
                    warn!("Skipping contract row without symbol or strike for {}", symbol);
                    None
                }
            }
        })
        .collect()
}

// ============================================================================
// Options API Response Types
// ============================================================================

/// Options API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionsResponse {
    option_chain: OptionsEnvelope,
}

#[derive(Debug, Deserialize)]
struct OptionsEnvelope {
    result: Option<Vec<OptionsResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsResult {
    underlying_symbol: Option<String>,
    expiration_dates: Option<Vec<i64>>,
    quote: Option<UnderlyingQuote>,
    options: Option<Vec<OptionPeriod>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnderlyingQuote {
    currency: Option<String>,
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionPeriod {
    expiration_date: Option<i64>,
    calls: Option<Vec<ContractRow>>,
    puts: Option<Vec<ContractRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContractRow {
    contract_symbol: Option<String>,
    strike: Option<f64>,
    currency: Option<String>,
    last_price: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
    volume: Option<u64>,
    open_interest: Option<u64>,
    implied_volatility: Option<f64>,
    in_the_money: Option<bool>,
    expiration: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::new("AAPL")
    }

    #[test]
    fn chain_maps_calls_and_puts_independently() {
        let response: OptionsResponse = serde_json::from_str(
            r#"{
                "optionChain": {
                    "result": [{
                        "underlyingSymbol": "AAPL",
                        "expirationDates": [1735257600, 1735862400],
                        "quote": {"currency": "USD", "regularMarketPrice": 189.95},
                        "options": [{
                            "expirationDate": 1735257600,
                            "calls": [
                                {
                                    "contractSymbol": "AAPL241227C00190000",
                                    "strike": 190.0,
                                    "lastPrice": 4.1,
                                    "bid": 4.0,
                                    "ask": 4.2,
                                    "volume": 1200,
                                    "openInterest": 9100,
                                    "impliedVolatility": 0.24,
                                    "inTheMoney": false
                                }
                            ],
                            "puts": [
                                {
                                    "contractSymbol": "AAPL241227P00185000",
                                    "strike": 185.0,
                                    "lastPrice": 2.3,
                                    "inTheMoney": false
                                }
                            ]
                        }]
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let chain = map_chain(&symbol(), response, None).unwrap();
        assert_eq!(chain.expiration, 1_735_257_600);
        assert_eq!(chain.underlying_symbol.as_deref(), Some("AAPL"));
        assert_eq!(chain.underlying_price, Some(189.95));
        assert_eq!(chain.calls.len(), 1);
        assert_eq!(chain.puts.len(), 1);

        // A strike present on one side only is fine.
        assert_eq!(chain.calls[0].strike, 190.0);
        assert_eq!(chain.puts[0].strike, 185.0);
        assert_eq!(chain.calls[0].currency.as_deref(), Some("USD"));
        assert_eq!(chain.calls[0].expiration, 1_735_257_600);
        assert_eq!(chain.puts[0].bid, None);
    }

    #[test]
    fn contract_rows_without_identity_are_skipped() {
        let response: OptionsResponse = serde_json::from_str(
            r#"{
                "optionChain": {
                    "result": [{
                        "options": [{
                            "expirationDate": 1735257600,
                            "calls": [
                                {"strike": 190.0},
                                {"contractSymbol": "AAPL241227C00195000", "strike": 195.0}
                            ]
                        }]
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let chain = map_chain(&symbol(), response, None).unwrap();
        assert_eq!(chain.calls.len(), 1);
        assert_eq!(chain.calls[0].contract_symbol, "AAPL241227C00195000");
    }

    #[test]
    fn null_result_is_an_unknown_symbol() {
        let response: OptionsResponse =
            serde_json::from_str(r#"{"optionChain":{"result":null,"error":null}}"#).unwrap();
        assert!(matches!(
            map_chain(&symbol(), response, None),
            Err(FetchError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn empty_result_is_an_empty_chain() {
        let response: OptionsResponse =
            serde_json::from_str(r#"{"optionChain":{"result":[],"error":null}}"#).unwrap();
        let chain = map_chain(&symbol(), response, Some(1_735_257_600)).unwrap();
        assert_eq!(chain.expiration, 1_735_257_600);
        assert!(chain.calls.is_empty() && chain.puts.is_empty());
    }
}
