#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickerdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified surface for the Yahoo Finance client.
//!
//! This crate re-exports the core types and the client, and provides the
//! multi-symbol fan-out in [`download`].
//!
//! # Features
//!
//! - `yahoo` (default) - the [`YahooClient`] operations
//!
//! # Example
//!
//! ```rust,ignore
//! use tickerdata::{Range, Interval, Symbol, YahooClient, download};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = YahooClient::new();
//!     let symbols = [Symbol::new("AAPL"), Symbol::new("MSFT")];
//!     let results = download::fetch_all(&symbols, |symbol| async {
//!         client.history(&symbol, Range::OneYear, Interval::OneDay).await
//!     })
//!     .await;
//!     assert_eq!(results.len(), 2);
//! }
//! ```

// Core types and helpers
pub use tickerdata_core::*;

// Client
#[cfg(feature = "yahoo")]
pub use tickerdata_yahoo::{BaseUrls, YahooClient};

/// Multi-symbol fan-out: concurrent per-symbol fetches collected into a
/// per-symbol outcome map.
pub mod download;

#[cfg(feature = "yahoo")]
pub use download::DownloadBuilder;
