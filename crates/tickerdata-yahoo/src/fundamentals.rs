//! Financial statement, earnings, calendar and share-count operations
//! (quote summary: statement history modules, earnings, earningsHistory,
//! calendarEvents, defaultKeyStatistics).

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{
    CalendarEvents, Earnings, EarningsFinancialsRow, EarningsHistory, EarningsQuarter,
    EarningsQuarterEps, FinancialStatement, ReportingPeriod, Result, ShareCount, Symbol,
};

use crate::client::YahooClient;
use crate::quotesummary::{self, ModuleBundle, RawInt, RawNum, int, num, uint};

impl YahooClient {
    /// Fetches the income statement across reporting periods.
    pub async fn income_statement(
        &self,
        symbol: &Symbol,
        period: ReportingPeriod,
    ) -> Result<FinancialStatement> {
        let modules = match period {
            ReportingPeriod::Annual => "incomeStatementHistory,price",
            ReportingPeriod::Quarterly => "incomeStatementHistoryQuarterly,price",
        };
        let bundle = quotesummary::fetch_modules(self, symbol, modules).await?;
        Ok(map_statement(symbol, bundle, |b| {
            let module = match period {
                ReportingPeriod::Annual => b.income_statement_history.take(),
                ReportingPeriod::Quarterly => b.income_statement_history_quarterly.take(),
            };
            module
                .and_then(|m| m.income_statement_history)
                .unwrap_or_default()
                .into_iter()
                .map(IncomeStatementRow::into_period)
                .collect()
        }))
    }

    /// Fetches the balance sheet across reporting periods.
    pub async fn balance_sheet(
        &self,
        symbol: &Symbol,
        period: ReportingPeriod,
    ) -> Result<FinancialStatement> {
        let modules = match period {
            ReportingPeriod::Annual => "balanceSheetHistory,price",
            ReportingPeriod::Quarterly => "balanceSheetHistoryQuarterly,price",
        };
        let bundle = quotesummary::fetch_modules(self, symbol, modules).await?;
        Ok(map_statement(symbol, bundle, |b| {
            let module = match period {
                ReportingPeriod::Annual => b.balance_sheet_history.take(),
                ReportingPeriod::Quarterly => b.balance_sheet_history_quarterly.take(),
            };
            module
                .and_then(|m| m.balance_sheet_statements)
                .unwrap_or_default()
                .into_iter()
                .map(BalanceSheetRow::into_period)
                .collect()
        }))
    }

    /// Fetches the cash flow statement across reporting periods.
    pub async fn cash_flow(
        &self,
        symbol: &Symbol,
        period: ReportingPeriod,
    ) -> Result<FinancialStatement> {
        let modules = match period {
            ReportingPeriod::Annual => "cashflowStatementHistory,price",
            ReportingPeriod::Quarterly => "cashflowStatementHistoryQuarterly,price",
        };
        let bundle = quotesummary::fetch_modules(self, symbol, modules).await?;
        Ok(map_statement(symbol, bundle, |b| {
            let module = match period {
                ReportingPeriod::Annual => b.cashflow_statement_history.take(),
                ReportingPeriod::Quarterly => b.cashflow_statement_history_quarterly.take(),
            };
            module
                .and_then(|m| m.cashflow_statements)
                .unwrap_or_default()
                .into_iter()
                .map(CashflowRow::into_period)
                .collect()
        }))
    }

    /// Fetches the earnings overview: quarterly EPS plus the
    /// revenue/earnings chart rows.
    pub async fn earnings(&self, symbol: &Symbol) -> Result<Earnings> {
        let bundle = quotesummary::fetch_modules(self, symbol, "earnings").await?;
        Ok(map_earnings(symbol, bundle))
    }

    /// Fetches past earnings reports with their surprises.
    pub async fn earnings_history(&self, symbol: &Symbol) -> Result<EarningsHistory> {
        let bundle = quotesummary::fetch_modules(self, symbol, "earningsHistory").await?;
        Ok(map_earnings_history(symbol, bundle))
    }

    /// Fetches the upcoming corporate calendar.
    pub async fn calendar(&self, symbol: &Symbol) -> Result<CalendarEvents> {
        let bundle = quotesummary::fetch_modules(self, symbol, "calendarEvents").await?;
        Ok(map_calendar(symbol, bundle))
    }

    /// Fetches point-in-time share counts.
    pub async fn shares(&self, symbol: &Symbol) -> Result<ShareCount> {
        let bundle =
            quotesummary::fetch_modules(self, symbol, "defaultKeyStatistics,price").await?;
        Ok(map_shares(symbol, bundle))
    }
}

/// Builds a statement from the period rows a module extractor produces.
fn map_statement(
    symbol: &Symbol,
    bundle: Option<ModuleBundle>,
    extract: impl FnOnce(&mut ModuleBundle) -> Vec<Option<(String, BTreeMap<String, f64>)>>,
) -> FinancialStatement {
    let Some(mut bundle) = bundle else {
        return FinancialStatement::new(symbol.clone(), None);
    };

    let currency = bundle.price.as_ref().and_then(|p| p.currency.clone());
    let mut statement = FinancialStatement::new(symbol.clone(), currency);

    for row in extract(&mut bundle) {
        match row {
            Some((label, items)) => {
                statement.periods.insert(label, items);
            }
            None => warn!("Skipping statement row without an end date for {}", symbol),
        }
    }
    statement
}

/// Converts an epoch-second end date into the fiscal period label.
fn period_label(end_date: Option<RawInt>) -> Option<String> {
    let ts = int(end_date)?;
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive().to_string())
}

/// Inserts one line item when the upstream reported a value for it.
fn put(items: &mut BTreeMap<String, f64>, name: &str, value: Option<RawNum>) {
    if let Some(v) = num(value) {
        items.insert(name.to_string(), v);
    }
}

fn map_earnings(symbol: &Symbol, bundle: Option<ModuleBundle>) -> Earnings {
    let module = bundle.and_then(|b| b.earnings);
    let Some(module) = module else {
        return Earnings {
            symbol: symbol.clone(),
            ..Earnings::default()
        };
    };

    let quarterly_eps = module
        .earnings_chart
        .and_then(|c| c.quarterly)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            row.date.map(|date| EarningsQuarterEps {
                period: date.to_string(),
                actual: num(row.actual),
                estimate: num(row.estimate),
            })
        })
        .collect();

    let (yearly_financials, quarterly_financials) = match module.financials_chart {
        Some(chart) => (
            map_financials_rows(chart.yearly.unwrap_or_default()),
            map_financials_rows(chart.quarterly.unwrap_or_default()),
        ),
        None => (Vec::new(), Vec::new()),
    };

    Earnings {
        symbol: symbol.clone(),
        quarterly_eps,
        yearly_financials,
        quarterly_financials,
    }
}

fn map_financials_rows(rows: Vec<FinancialsRow>) -> Vec<EarningsFinancialsRow> {
    rows.into_iter()
        .filter_map(|row| {
            row.date.map(|date| EarningsFinancialsRow {
                period: date.to_string(),
                revenue: num(row.revenue),
                earnings: num(row.earnings),
            })
        })
        .collect()
}

fn map_earnings_history(symbol: &Symbol, bundle: Option<ModuleBundle>) -> EarningsHistory {
    let quarters = bundle
        .and_then(|b| b.earnings_history)
        .and_then(|m| m.history)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let Some(period) = row.period else {
                warn!("Skipping earnings history row without a period for {}", symbol);
                return None;
            };
            Some(EarningsQuarter {
                period,
                quarter_end: int(row.quarter),
                eps_actual: num(row.eps_actual),
                eps_estimate: num(row.eps_estimate),
                eps_difference: num(row.eps_difference),
                surprise_pct: num(row.surprise_percent),
            })
        })
        .collect();

    EarningsHistory {
        symbol: symbol.clone(),
        quarters,
    }
}

fn map_calendar(symbol: &Symbol, bundle: Option<ModuleBundle>) -> CalendarEvents {
    let module = bundle.and_then(|b| b.calendar_events);
    let Some(module) = module else {
        return CalendarEvents {
            symbol: symbol.clone(),
            ..CalendarEvents::default()
        };
    };

    let mut calendar = CalendarEvents {
        symbol: symbol.clone(),
        ex_dividend_date: int(module.ex_dividend_date),
        dividend_date: int(module.dividend_date),
        ..CalendarEvents::default()
    };

    if let Some(earnings) = module.earnings {
        calendar.earnings_dates = earnings
            .earnings_date
            .unwrap_or_default()
            .into_iter()
            .filter_map(|pair| pair.raw)
            .collect();
        calendar.earnings_average = num(earnings.earnings_average);
        calendar.earnings_low = num(earnings.earnings_low);
        calendar.earnings_high = num(earnings.earnings_high);
        calendar.revenue_average = int(earnings.revenue_average).map(|v| v as f64);
        calendar.revenue_low = int(earnings.revenue_low).map(|v| v as f64);
        calendar.revenue_high = int(earnings.revenue_high).map(|v| v as f64);
    }
    calendar
}

fn map_shares(symbol: &Symbol, bundle: Option<ModuleBundle>) -> ShareCount {
    let Some(bundle) = bundle else {
        return ShareCount {
            symbol: symbol.clone(),
            ..ShareCount::default()
        };
    };

    let as_of = bundle.price.as_ref().and_then(|p| p.regular_market_time);
    match bundle.default_key_statistics {
        Some(stats) => ShareCount {
            symbol: symbol.clone(),
            shares_outstanding: uint(stats.shares_outstanding),
            implied_shares_outstanding: uint(stats.implied_shares_outstanding),
            float_shares: uint(stats.float_shares),
            as_of,
        },
        None => ShareCount {
            symbol: symbol.clone(),
            as_of,
            ..ShareCount::default()
        },
    }
}

// ============================================================================
// Quote Summary Module Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IncomeStatementHistoryModule {
    pub(crate) income_statement_history: Option<Vec<IncomeStatementRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IncomeStatementRow {
    end_date: Option<RawInt>,
    total_revenue: Option<RawNum>,
    cost_of_revenue: Option<RawNum>,
    gross_profit: Option<RawNum>,
    research_development: Option<RawNum>,
    selling_general_administrative: Option<RawNum>,
    total_operating_expenses: Option<RawNum>,
    operating_income: Option<RawNum>,
    interest_expense: Option<RawNum>,
    income_before_tax: Option<RawNum>,
    income_tax_expense: Option<RawNum>,
    net_income: Option<RawNum>,
    ebit: Option<RawNum>,
}

impl IncomeStatementRow {
    fn into_period(self) -> Option<(String, BTreeMap<String, f64>)> {
        let label = period_label(self.end_date)?;
        let mut items = BTreeMap::new();
        put(&mut items, "totalRevenue", self.total_revenue);
        put(&mut items, "costOfRevenue", self.cost_of_revenue);
        put(&mut items, "grossProfit", self.gross_profit);
        put(&mut items, "researchDevelopment", self.research_development);
        put(
            &mut items,
            "sellingGeneralAdministrative",
            self.selling_general_administrative,
        );
        put(
            &mut items,
            "totalOperatingExpenses",
            self.total_operating_expenses,
        );
        put(&mut items, "operatingIncome", self.operating_income);
        put(&mut items, "interestExpense", self.interest_expense);
        put(&mut items, "incomeBeforeTax", self.income_before_tax);
        put(&mut items, "incomeTaxExpense", self.income_tax_expense);
        put(&mut items, "netIncome", self.net_income);
        put(&mut items, "ebit", self.ebit);
        Some((label, items))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceSheetHistoryModule {
    pub(crate) balance_sheet_statements: Option<Vec<BalanceSheetRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceSheetRow {
    end_date: Option<RawInt>,
    cash: Option<RawNum>,
    short_term_investments: Option<RawNum>,
    net_receivables: Option<RawNum>,
    inventory: Option<RawNum>,
    total_current_assets: Option<RawNum>,
    property_plant_equipment: Option<RawNum>,
    total_assets: Option<RawNum>,
    accounts_payable: Option<RawNum>,
    short_long_term_debt: Option<RawNum>,
    total_current_liabilities: Option<RawNum>,
    long_term_debt: Option<RawNum>,
    total_liab: Option<RawNum>,
    total_stockholder_equity: Option<RawNum>,
    retained_earnings: Option<RawNum>,
}

impl BalanceSheetRow {
    fn into_period(self) -> Option<(String, BTreeMap<String, f64>)> {
        let label = period_label(self.end_date)?;
        let mut items = BTreeMap::new();
        put(&mut items, "cash", self.cash);
        put(&mut items, "shortTermInvestments", self.short_term_investments);
        put(&mut items, "netReceivables", self.net_receivables);
        put(&mut items, "inventory", self.inventory);
        put(&mut items, "totalCurrentAssets", self.total_current_assets);
        put(
            &mut items,
            "propertyPlantEquipment",
            self.property_plant_equipment,
        );
        put(&mut items, "totalAssets", self.total_assets);
        put(&mut items, "accountsPayable", self.accounts_payable);
        put(&mut items, "shortLongTermDebt", self.short_long_term_debt);
        put(
            &mut items,
            "totalCurrentLiabilities",
            self.total_current_liabilities,
        );
        put(&mut items, "longTermDebt", self.long_term_debt);
        put(&mut items, "totalLiab", self.total_liab);
        put(
            &mut items,
            "totalStockholderEquity",
            self.total_stockholder_equity,
        );
        put(&mut items, "retainedEarnings", self.retained_earnings);
        Some((label, items))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CashflowHistoryModule {
    pub(crate) cashflow_statements: Option<Vec<CashflowRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CashflowRow {
    end_date: Option<RawInt>,
    net_income: Option<RawNum>,
    depreciation: Option<RawNum>,
    change_to_netincome: Option<RawNum>,
    total_cash_from_operating_activities: Option<RawNum>,
    capital_expenditures: Option<RawNum>,
    investments: Option<RawNum>,
    total_cashflows_from_investing_activities: Option<RawNum>,
    dividends_paid: Option<RawNum>,
    net_borrowings: Option<RawNum>,
    total_cash_from_financing_activities: Option<RawNum>,
    change_in_cash: Option<RawNum>,
}

impl CashflowRow {
    fn into_period(self) -> Option<(String, BTreeMap<String, f64>)> {
        let label = period_label(self.end_date)?;
        let mut items = BTreeMap::new();
        put(&mut items, "netIncome", self.net_income);
        put(&mut items, "depreciation", self.depreciation);
        put(&mut items, "changeToNetincome", self.change_to_netincome);
        put(
            &mut items,
            "totalCashFromOperatingActivities",
            self.total_cash_from_operating_activities,
        );
        put(&mut items, "capitalExpenditures", self.capital_expenditures);
        put(&mut items, "investments", self.investments);
        put(
            &mut items,
            "totalCashflowsFromInvestingActivities",
            self.total_cashflows_from_investing_activities,
        );
        put(&mut items, "dividendsPaid", self.dividends_paid);
        put(&mut items, "netBorrowings", self.net_borrowings);
        put(
            &mut items,
            "totalCashFromFinancingActivities",
            self.total_cash_from_financing_activities,
        );
        put(&mut items, "changeInCash", self.change_in_cash);
        Some((label, items))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EarningsModule {
    earnings_chart: Option<EarningsChart>,
    financials_chart: Option<FinancialsChart>,
}

#[derive(Debug, Deserialize)]
struct EarningsChart {
    quarterly: Option<Vec<EpsRow>>,
}

#[derive(Debug, Deserialize)]
struct EpsRow {
    date: Option<PeriodTag>,
    actual: Option<RawNum>,
    estimate: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
struct FinancialsChart {
    yearly: Option<Vec<FinancialsRow>>,
    quarterly: Option<Vec<FinancialsRow>>,
}

#[derive(Debug, Deserialize)]
struct FinancialsRow {
    date: Option<PeriodTag>,
    revenue: Option<RawNum>,
    earnings: Option<RawNum>,
}

/// Period labels arrive as a bare year for yearly rows and as a quarter tag
/// string for quarterly rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PeriodTag {
    Year(i64),
    Tag(String),
}

impl fmt::Display for PeriodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Tag(t) => write!(f, "{t}"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EarningsHistoryModule {
    history: Option<Vec<EarningsHistoryRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EarningsHistoryRow {
    period: Option<String>,
    quarter: Option<RawInt>,
    eps_actual: Option<RawNum>,
    eps_estimate: Option<RawNum>,
    eps_difference: Option<RawNum>,
    surprise_percent: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalendarEventsModule {
    earnings: Option<CalendarEarnings>,
    ex_dividend_date: Option<RawInt>,
    dividend_date: Option<RawInt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarEarnings {
    earnings_date: Option<Vec<RawInt>>,
    earnings_average: Option<RawNum>,
    earnings_low: Option<RawNum>,
    earnings_high: Option<RawNum>,
    revenue_average: Option<RawInt>,
    revenue_low: Option<RawInt>,
    revenue_high: Option<RawInt>,
}
