//! Company profile operations (quote summary: price, summaryProfile,
//! summaryDetail, defaultKeyStatistics).

use serde::Deserialize;

use tickerdata_core::{FastInfo, Result, Symbol, TickerInfo};

use crate::client::YahooClient;
use crate::quotesummary::{self, ModuleBundle, RawInt, RawNum, num, uint};

/// Modules requested by the info operation.
const INFO_MODULES: &str = "price,summaryProfile,summaryDetail,defaultKeyStatistics";

impl YahooClient {
    /// Fetches the full profile for a symbol.
    ///
    /// Every field of the result may be absent; a symbol the upstream knows
    /// but has no module data for yields an all-absent profile.
    pub async fn info(&self, symbol: &Symbol) -> Result<TickerInfo> {
        let bundle = quotesummary::fetch_modules(self, symbol, INFO_MODULES).await?;
        Ok(match bundle {
            Some(bundle) => map_info(symbol, bundle),
            None => TickerInfo::new(symbol.clone()),
        })
    }

    /// Fetches the headline figures for a symbol.
    ///
    /// A projection of [`info`](Self::info) onto a smaller field set; no
    /// separate endpoint is involved.
    pub async fn fast_info(&self, symbol: &Symbol) -> Result<FastInfo> {
        let info = self.info(symbol).await?;
        Ok(FastInfo::from(&info))
    }
}

fn map_info(symbol: &Symbol, bundle: ModuleBundle) -> TickerInfo {
    let price = bundle.price;
    let profile = bundle.summary_profile;
    let detail = bundle.summary_detail;
    let stats = bundle.default_key_statistics;

    let mut info = TickerInfo::new(symbol.clone());

    if let Some(price) = price {
        info.short_name = price.short_name;
        info.long_name = price.long_name;
        info.quote_type = price.quote_type;
        info.exchange = price.exchange_name;
        info.currency = price.currency;
        info.market_cap = num(price.market_cap);
        info.regular_market_price = num(price.regular_market_price);
        info.regular_market_time = price.regular_market_time;
    }

    if let Some(profile) = profile {
        info.sector = profile.sector;
        info.industry = profile.industry;
        info.website = profile.website;
        info.country = profile.country;
        info.city = profile.city;
        info.employees = profile.full_time_employees;
        info.business_summary = profile.long_business_summary;
    }

    if let Some(detail) = detail {
        info.market_cap = info.market_cap.or(num(detail.market_cap));
        info.trailing_pe = num(detail.trailing_pe);
        info.forward_pe = num(detail.forward_pe);
        info.price_to_sales = num(detail.price_to_sales_trailing_12_months);
        info.dividend_rate = num(detail.dividend_rate);
        info.dividend_yield = num(detail.dividend_yield);
        info.payout_ratio = num(detail.payout_ratio);
        info.beta = num(detail.beta);
        info.previous_close = num(detail.previous_close);
        info.fifty_two_week_high = num(detail.fifty_two_week_high);
        info.fifty_two_week_low = num(detail.fifty_two_week_low);
        info.fifty_day_average = num(detail.fifty_day_average);
        info.two_hundred_day_average = num(detail.two_hundred_day_average);
        info.average_volume = uint(detail.average_volume);
    }

    if let Some(stats) = stats {
        info.enterprise_value = num(stats.enterprise_value);
        info.price_to_book = num(stats.price_to_book);
        info.peg_ratio = num(stats.peg_ratio);
        info.trailing_eps = num(stats.trailing_eps);
        info.forward_eps = num(stats.forward_eps);
        info.fifty_two_week_change = num(stats.fifty_two_week_change);
        info.shares_outstanding = uint(stats.shares_outstanding);
        info.float_shares = uint(stats.float_shares);
    }

    info
}

// ============================================================================
// Quote Summary Module Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceModule {
    pub(crate) currency: Option<String>,
    pub(crate) short_name: Option<String>,
    pub(crate) long_name: Option<String>,
    pub(crate) quote_type: Option<String>,
    pub(crate) exchange_name: Option<String>,
    pub(crate) market_cap: Option<RawNum>,
    pub(crate) regular_market_price: Option<RawNum>,
    pub(crate) regular_market_time: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryProfileModule {
    pub(crate) sector: Option<String>,
    pub(crate) industry: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) full_time_employees: Option<u64>,
    pub(crate) long_business_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailModule {
    pub(crate) market_cap: Option<RawNum>,
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum>,
    pub(crate) price_to_sales_trailing_12_months: Option<RawNum>,
    pub(crate) dividend_rate: Option<RawNum>,
    pub(crate) dividend_yield: Option<RawNum>,
    pub(crate) payout_ratio: Option<RawNum>,
    pub(crate) beta: Option<RawNum>,
    pub(crate) previous_close: Option<RawNum>,
    pub(crate) fifty_two_week_high: Option<RawNum>,
    pub(crate) fifty_two_week_low: Option<RawNum>,
    pub(crate) fifty_day_average: Option<RawNum>,
    pub(crate) two_hundred_day_average: Option<RawNum>,
    pub(crate) average_volume: Option<RawInt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KeyStatisticsModule {
    pub(crate) enterprise_value: Option<RawNum>,
    pub(crate) price_to_book: Option<RawNum>,
    pub(crate) peg_ratio: Option<RawNum>,
    pub(crate) trailing_eps: Option<RawNum>,
    pub(crate) forward_eps: Option<RawNum>,
    #[serde(rename = "52WeekChange")]
    pub(crate) fifty_two_week_change: Option<RawNum>,
    pub(crate) shares_outstanding: Option<RawInt>,
    pub(crate) implied_shares_outstanding: Option<RawInt>,
    pub(crate) float_shares: Option<RawInt>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotesummary::{QuoteSummaryResponse, take_bundle};

    #[test]
    fn info_assembles_the_four_modules() {
        let response: QuoteSummaryResponse = serde_json::from_str(
            r#"{
                "quoteSummary": {
                    "result": [{
                        "price": {
                            "currency": "USD",
                            "shortName": "Apple Inc.",
                            "longName": "Apple Inc.",
                            "quoteType": "EQUITY",
                            "exchangeName": "NasdaqGS",
                            "marketCap": {"raw": 2950000000000, "fmt": "2.95T"},
                            "regularMarketPrice": {"raw": 189.95, "fmt": "189.95"},
                            "regularMarketTime": 1700000000
                        },
                        "summaryProfile": {
                            "sector": "Technology",
                            "industry": "Consumer Electronics",
                            "country": "United States",
                            "fullTimeEmployees": 164000,
                            "longBusinessSummary": "Apple Inc. designs smartphones."
                        },
                        "summaryDetail": {
                            "trailingPE": {"raw": 31.2},
                            "dividendYield": {"raw": 0.005},
                            "payoutRatio": {},
                            "fiftyTwoWeekHigh": {"raw": 199.62},
                            "fiftyTwoWeekLow": {"raw": 124.17},
                            "averageVolume": {"raw": 57000000}
                        },
                        "defaultKeyStatistics": {
                            "priceToBook": {"raw": 45.3},
                            "52WeekChange": {"raw": 0.31},
                            "sharesOutstanding": {"raw": 15550061000}
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let bundle = take_bundle(response, &Symbol::new("AAPL")).unwrap().unwrap();
        let info = map_info(&Symbol::new("AAPL"), bundle);

        assert_eq!(info.long_name.as_deref(), Some("Apple Inc."));
        assert_eq!(info.sector.as_deref(), Some("Technology"));
        assert_eq!(info.market_cap, Some(2.95e12));
        assert_eq!(info.trailing_pe, Some(31.2));
        assert_eq!(info.dividend_yield, Some(0.005));
        // Empty-object pair decodes to an absent field, not zero.
        assert_eq!(info.payout_ratio, None);
        assert_eq!(info.price_to_book, Some(45.3));
        assert_eq!(info.shares_outstanding, Some(15_550_061_000));
        assert_eq!(info.employees, Some(164_000));
    }

    #[test]
    fn missing_modules_leave_their_fields_absent() {
        let response: QuoteSummaryResponse = serde_json::from_str(
            r#"{"quoteSummary":{"result":[{"price":{"currency":"USD"}}],"error":null}}"#,
        )
        .unwrap();
        let bundle = take_bundle(response, &Symbol::new("AAPL")).unwrap().unwrap();
        let info = map_info(&Symbol::new("AAPL"), bundle);

        assert_eq!(info.currency.as_deref(), Some("USD"));
        assert_eq!(info.sector, None);
        assert_eq!(info.trailing_pe, None);
        assert_eq!(info.shares_outstanding, None);
    }
}
