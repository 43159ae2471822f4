#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickerdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Yahoo Finance client.
//!
//! This crate provides the foundational pieces shared by every operation:
//!
//! - [`FetchError`](error::FetchError) / [`Result`](error::Result) - the
//!   uniform success-or-failure discipline
//! - [`Symbol`](types::Symbol), [`Quote`](types::Quote),
//!   [`HistoricalSeries`](types::HistoricalSeries) - price data
//! - [`Dividend`](types::Dividend), [`Split`](types::Split),
//!   [`CorporateAction`](types::CorporateAction) - corporate events
//! - [`Range`](range::Range), [`Interval`](range::Interval),
//!   [`ReportingPeriod`](range::ReportingPeriod) - closed request enumerations
//! - [`view`] - sorting, range filtering and aggregate helpers over
//!   already-fetched lists

/// Analyst recommendations, news and sustainability entities.
pub mod analysis;
/// Error types and the `Result` alias used by every operation.
pub mod error;
/// Financial statements, earnings, calendar and share-count entities.
pub mod fundamentals;
/// Holder and insider entities.
pub mod holders;
/// Option contract and option chain entities.
pub mod options;
/// Company profile entities (`TickerInfo`, `FastInfo`).
pub mod profile;
/// Closed range, interval and reporting-period enumerations.
pub mod range;
/// Core price and corporate-action types.
pub mod types;
/// Derived-view helpers: sorting, filtering and aggregates.
pub mod view;

// Re-export commonly used items at crate root
pub use analysis::{NewsArticle, Recommendation, Recommendations, SustainabilityScores};
pub use error::{FetchError, Result};
pub use fundamentals::{
    CalendarEvents, Earnings, EarningsFinancialsRow, EarningsHistory, EarningsQuarter,
    EarningsQuarterEps, FinancialStatement, ShareCount,
};
pub use holders::{
    InsiderRoster, InsiderRosterHolder, InsiderTransaction, InsiderTransactions,
    InstitutionalHolder, InstitutionalHolders, MajorHolders, MutualFundHolders,
};
pub use options::{ExpirationDates, OptionChain, OptionContract};
pub use profile::{FastInfo, TickerInfo};
pub use range::{Interval, Range, ReportingPeriod};
pub use types::{
    CapitalGain, CorporateAction, Dividend, HistoricalSeries, Quote, Split, Symbol,
};
