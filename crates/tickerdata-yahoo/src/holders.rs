//! Ownership operations (quote summary: majorHoldersBreakdown,
//! institutionOwnership, fundOwnership, insiderTransactions, insiderHolders).

use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{
    InsiderRoster, InsiderRosterHolder, InsiderTransaction, InsiderTransactions,
    InstitutionalHolder, InstitutionalHolders, MajorHolders, MutualFundHolders, Result, Symbol,
};

use crate::client::YahooClient;
use crate::quotesummary::{self, ModuleBundle, RawInt, RawNum, int, num, uint};

impl YahooClient {
    /// Fetches the ownership breakdown percentages.
    pub async fn major_holders(&self, symbol: &Symbol) -> Result<MajorHolders> {
        let bundle = quotesummary::fetch_modules(self, symbol, "majorHoldersBreakdown").await?;
        Ok(map_major_holders(symbol, bundle))
    }

    /// Fetches the top institutional holders.
    pub async fn institutional_holders(&self, symbol: &Symbol) -> Result<InstitutionalHolders> {
        let bundle = quotesummary::fetch_modules(self, symbol, "institutionOwnership").await?;
        let holders = map_ownership(symbol, bundle.and_then(|b| b.institution_ownership));
        Ok(InstitutionalHolders {
            symbol: symbol.clone(),
            holders,
        })
    }

    /// Fetches the top mutual fund holders.
    pub async fn mutual_fund_holders(&self, symbol: &Symbol) -> Result<MutualFundHolders> {
        let bundle = quotesummary::fetch_modules(self, symbol, "fundOwnership").await?;
        let holders = map_ownership(symbol, bundle.and_then(|b| b.fund_ownership));
        Ok(MutualFundHolders {
            symbol: symbol.clone(),
            holders,
        })
    }

    /// Fetches recent insider transaction filings.
    pub async fn insider_transactions(&self, symbol: &Symbol) -> Result<InsiderTransactions> {
        let bundle = quotesummary::fetch_modules(self, symbol, "insiderTransactions").await?;
        Ok(map_insider_transactions(symbol, bundle))
    }

    /// Fetches the company insider roster.
    pub async fn insider_roster(&self, symbol: &Symbol) -> Result<InsiderRoster> {
        let bundle = quotesummary::fetch_modules(self, symbol, "insiderHolders").await?;
        Ok(map_insider_roster(symbol, bundle))
    }
}

fn map_major_holders(symbol: &Symbol, bundle: Option<ModuleBundle>) -> MajorHolders {
    let module = bundle.and_then(|b| b.major_holders_breakdown);
    let Some(module) = module else {
        return MajorHolders {
            symbol: symbol.clone(),
            ..MajorHolders::default()
        };
    };

    MajorHolders {
        symbol: symbol.clone(),
        insiders_pct: num(module.insiders_percent_held),
        institutions_pct: num(module.institutions_percent_held),
        institutions_float_pct: num(module.institutions_float_percent_held),
        institutions_count: uint(module.institutions_count),
    }
}

fn map_ownership(symbol: &Symbol, module: Option<OwnershipModule>) -> Vec<InstitutionalHolder> {
    module
        .and_then(|m| m.ownership_list)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let Some(organization) = row.organization else {
                warn!("Skipping ownership row without an organization for {}", symbol);
                return None;
            };
            Some(InstitutionalHolder {
                organization,
                report_date: int(row.report_date),
                shares: uint(row.position),
                value: uint(row.value),
                pct_held: num(row.pct_held),
            })
        })
        .collect()
}

fn map_insider_transactions(symbol: &Symbol, bundle: Option<ModuleBundle>) -> InsiderTransactions {
    let transactions = bundle
        .and_then(|b| b.insider_transactions)
        .and_then(|m| m.transactions)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let Some(insider) = row.filer_name else {
                warn!("Skipping insider transaction without a filer for {}", symbol);
                return None;
            };
            Some(InsiderTransaction {
                insider,
                position: row.filer_relation,
                transaction: row.transaction_text,
                shares: uint(row.shares),
                value: uint(row.value),
                start_date: int(row.start_date),
                ownership: row.ownership,
            })
        })
        .collect();

    InsiderTransactions {
        symbol: symbol.clone(),
        transactions,
    }
}

fn map_insider_roster(symbol: &Symbol, bundle: Option<ModuleBundle>) -> InsiderRoster {
    let holders = bundle
        .and_then(|b| b.insider_holders)
        .and_then(|m| m.holders)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let Some(name) = row.name else {
                warn!("Skipping roster row without a name for {}", symbol);
                return None;
            };
            Some(InsiderRosterHolder {
                name,
                position: row.relation,
                most_recent_transaction: row.transaction_description,
                latest_transaction_date: int(row.latest_trans_date),
                shares_owned_directly: uint(row.position_direct),
                position_direct_date: int(row.position_direct_date),
            })
        })
        .collect();

    InsiderRoster {
        symbol: symbol.clone(),
        holders,
    }
}

// ============================================================================
// Quote Summary Module Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MajorHoldersModule {
    insiders_percent_held: Option<RawNum>,
    institutions_percent_held: Option<RawNum>,
    institutions_float_percent_held: Option<RawNum>,
    institutions_count: Option<RawInt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnershipModule {
    ownership_list: Option<Vec<OwnershipRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OwnershipRow {
    organization: Option<String>,
    report_date: Option<RawInt>,
    position: Option<RawInt>,
    value: Option<RawInt>,
    pct_held: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InsiderTransactionsModule {
    transactions: Option<Vec<InsiderTransactionRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsiderTransactionRow {
    filer_name: Option<String>,
    filer_relation: Option<String>,
    transaction_text: Option<String>,
    shares: Option<RawInt>,
    value: Option<RawInt>,
    start_date: Option<RawInt>,
    ownership: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InsiderHoldersModule {
    holders: Option<Vec<InsiderHolderRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsiderHolderRow {
    name: Option<String>,
    relation: Option<String>,
    transaction_description: Option<String>,
    latest_trans_date: Option<RawInt>,
    position_direct: Option<RawInt>,
    position_direct_date: Option<RawInt>,
}
