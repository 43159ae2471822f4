//! Holder and insider entities.
//!
//! Flat optional-field records, always delivered inside a `symbol + list`
//! wrapper by the corresponding fetch operation.

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// Ownership breakdown percentages for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorHolders {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Fraction of shares held by insiders.
    pub insiders_pct: Option<f64>,
    /// Fraction of shares held by institutions.
    pub institutions_pct: Option<f64>,
    /// Fraction of the float held by institutions.
    pub institutions_float_pct: Option<f64>,
    /// Number of institutions holding shares.
    pub institutions_count: Option<u64>,
}

/// One institutional holder position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionalHolder {
    /// Name of the holding organization.
    pub organization: String,
    /// Date of the last reported position, seconds since the Unix epoch.
    pub report_date: Option<i64>,
    /// Number of shares held.
    pub shares: Option<u64>,
    /// Market value of the position.
    pub value: Option<u64>,
    /// Fraction of outstanding shares held.
    pub pct_held: Option<f64>,
}

/// Top institutional holders for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionalHolders {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Reported positions.
    pub holders: Vec<InstitutionalHolder>,
}

/// Top mutual fund holders for a symbol.
///
/// Rows share the institutional holder shape; only the upstream module
/// differs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MutualFundHolders {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Reported positions.
    pub holders: Vec<InstitutionalHolder>,
}

/// One insider transaction filing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsiderTransaction {
    /// Name of the filing insider.
    pub insider: String,
    /// The insider's relation to the company.
    pub position: Option<String>,
    /// Transaction description as filed (e.g. `"Sale"`).
    pub transaction: Option<String>,
    /// Number of shares involved.
    pub shares: Option<u64>,
    /// Total transaction value.
    pub value: Option<u64>,
    /// Transaction start date, seconds since the Unix epoch.
    pub start_date: Option<i64>,
    /// Direct vs. indirect ownership marker.
    pub ownership: Option<String>,
}

/// Recent insider transactions for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsiderTransactions {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Reported transactions.
    pub transactions: Vec<InsiderTransaction>,
}

/// One insider on the company roster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsiderRosterHolder {
    /// Name of the insider.
    pub name: String,
    /// The insider's position in the company.
    pub position: Option<String>,
    /// Description of the most recent transaction.
    pub most_recent_transaction: Option<String>,
    /// Date of the latest transaction, seconds since the Unix epoch.
    pub latest_transaction_date: Option<i64>,
    /// Shares owned directly.
    pub shares_owned_directly: Option<u64>,
    /// Date of the direct ownership filing, seconds since the Unix epoch.
    pub position_direct_date: Option<i64>,
}

/// Company insider roster for a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InsiderRoster {
    /// Stock symbol.
    pub symbol: Symbol,
    /// Roster entries.
    pub holders: Vec<InsiderRosterHolder>,
}
