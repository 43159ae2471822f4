//! Financial statement, earnings, calendar and share-count entities.
//!
//! Statements are represented as flat period-to-line-item maps rather than
//! fixed-field structs: a period key (the fiscal end-date label) maps to the
//! line items the upstream actually reported for it. Absent line items are
//! absent keys, never null placeholders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Symbol;

/// One financial statement kind (income, balance sheet or cash flow) across
/// reporting periods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Reporting currency, when the upstream discloses one.
    pub currency: Option<String>,
    /// Period key (fiscal end-date label, `YYYY-MM-DD`) to the flat line-item
    /// map reported for that period.
    pub periods: BTreeMap<String, BTreeMap<String, f64>>,
}

impl FinancialStatement {
    /// Creates an empty statement for a symbol.
    #[must_use]
    pub fn new(symbol: Symbol, currency: Option<String>) -> Self {
        Self {
            symbol,
            currency,
            periods: BTreeMap::new(),
        }
    }

    /// Returns one line item for one period, when reported.
    #[must_use]
    pub fn line_item(&self, period: &str, item: &str) -> Option<f64> {
        self.periods.get(period).and_then(|m| m.get(item)).copied()
    }

    /// Returns the period keys in ascending date order.
    pub fn period_labels(&self) -> impl Iterator<Item = &str> {
        self.periods.keys().map(String::as_str)
    }
}

/// One quarterly EPS observation from the earnings chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsQuarterEps {
    /// Quarter label as reported (e.g. `"4Q2024"`).
    pub period: String,
    /// Actual earnings per share.
    pub actual: Option<f64>,
    /// Consensus EPS estimate.
    pub estimate: Option<f64>,
}

/// Revenue and earnings for one reported period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsFinancialsRow {
    /// Period label as reported (a year or a quarter tag).
    pub period: String,
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Net earnings.
    pub earnings: Option<f64>,
}

/// Earnings overview for a symbol: quarterly EPS plus the revenue/earnings
/// chart rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Earnings {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Quarterly EPS actual vs. estimate rows.
    pub quarterly_eps: Vec<EarningsQuarterEps>,
    /// Yearly revenue/earnings rows.
    pub yearly_financials: Vec<EarningsFinancialsRow>,
    /// Quarterly revenue/earnings rows.
    pub quarterly_financials: Vec<EarningsFinancialsRow>,
}

/// One historical earnings report with its surprise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsQuarter {
    /// Relative period label as reported (e.g. `"-1q"`).
    pub period: String,
    /// Quarter end timestamp, seconds since the Unix epoch.
    pub quarter_end: Option<i64>,
    /// Actual earnings per share.
    pub eps_actual: Option<f64>,
    /// Consensus EPS estimate.
    pub eps_estimate: Option<f64>,
    /// Actual minus estimate.
    pub eps_difference: Option<f64>,
    /// Surprise as a fraction of the estimate.
    pub surprise_pct: Option<f64>,
}

/// Past earnings reports for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsHistory {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Reported quarters, most recent last as served by the upstream.
    pub quarters: Vec<EarningsQuarter>,
}

/// Upcoming corporate calendar for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvents {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Expected earnings dates (a window when not yet confirmed).
    pub earnings_dates: Vec<i64>,
    /// Consensus EPS estimate for the upcoming report.
    pub earnings_average: Option<f64>,
    /// Low end of the EPS estimate range.
    pub earnings_low: Option<f64>,
    /// High end of the EPS estimate range.
    pub earnings_high: Option<f64>,
    /// Consensus revenue estimate for the upcoming report.
    pub revenue_average: Option<f64>,
    /// Low end of the revenue estimate range.
    pub revenue_low: Option<f64>,
    /// High end of the revenue estimate range.
    pub revenue_high: Option<f64>,
    /// Next ex-dividend date.
    pub ex_dividend_date: Option<i64>,
    /// Next dividend payment date.
    pub dividend_date: Option<i64>,
}

/// Point-in-time share counts for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareCount {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Shares outstanding.
    pub shares_outstanding: Option<u64>,
    /// Implied shares outstanding (includes all share classes).
    pub implied_shares_outstanding: Option<u64>,
    /// Free-floating shares.
    pub float_shares: Option<u64>,
    /// Timestamp the counts were served at, when known.
    pub as_of: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_line_items_are_absent_keys() {
        let mut statement = FinancialStatement::new(Symbol::new("AAPL"), Some("USD".to_string()));
        statement.periods.insert(
            "2024-09-30".to_string(),
            BTreeMap::from([("totalRevenue".to_string(), 391_035_000_000.0)]),
        );

        assert_eq!(
            statement.line_item("2024-09-30", "totalRevenue"),
            Some(391_035_000_000.0)
        );
        assert_eq!(statement.line_item("2024-09-30", "netIncome"), None);
        assert_eq!(statement.line_item("2023-09-30", "totalRevenue"), None);
    }

    #[test]
    fn period_labels_iterate_in_date_order() {
        let mut statement = FinancialStatement::new(Symbol::new("AAPL"), None);
        for label in ["2024-09-30", "2022-09-24", "2023-09-30"] {
            statement
                .periods
                .insert(label.to_string(), BTreeMap::new());
        }

        let labels: Vec<&str> = statement.period_labels().collect();
        assert_eq!(labels, vec!["2022-09-24", "2023-09-30", "2024-09-30"]);
    }
}
