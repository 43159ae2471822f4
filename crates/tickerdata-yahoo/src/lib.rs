#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickerdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Yahoo Finance data client.
//!
//! This crate provides [`YahooClient`], a typed client for Yahoo Finance's
//! public JSON endpoints (chart, quote summary, options, search). Operations
//! are grouped by data kind:
//!
//! - price history and corporate events: [`YahooClient::history`],
//!   [`YahooClient::dividends`], [`YahooClient::splits`],
//!   [`YahooClient::actions`]
//! - company profile: [`YahooClient::info`], [`YahooClient::fast_info`]
//! - fundamentals: [`YahooClient::income_statement`],
//!   [`YahooClient::balance_sheet`], [`YahooClient::cash_flow`],
//!   [`YahooClient::earnings`], [`YahooClient::calendar`]
//! - ownership: [`YahooClient::major_holders`],
//!   [`YahooClient::institutional_holders`]
//! - analysis: [`YahooClient::recommendations`],
//!   [`YahooClient::sustainability`]
//! - derivatives: [`YahooClient::options`], [`YahooClient::option_chain`]
//! - news: [`YahooClient::news`]
//!
//! # Example
//!
//! ```rust,ignore
//! use tickerdata_yahoo::YahooClient;
//! use tickerdata_core::{Interval, Range, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> tickerdata_core::Result<()> {
//!     let client = YahooClient::new();
//!     let series = client
//!         .history(&Symbol::new("AAPL"), Range::OneYear, Interval::OneDay)
//!         .await?;
//!     println!("{} bars", series.len());
//!     Ok(())
//! }
//! ```

mod analysis;
mod chart;
mod client;
mod fundamentals;
mod holders;
mod news;
mod options;
mod profile;
mod quotesummary;
mod urls;

pub use client::{BaseUrls, YahooClient};
