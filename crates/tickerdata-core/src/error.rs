//! Error types for fetch operations.
//!
//! This module defines [`FetchError`], the closed error taxonomy every
//! operation folds its failures into, and the [`Result`] alias used across
//! the workspace. Callers branch on the variant; nothing escapes an
//! operation boundary as a panic or an unstructured error.

use thiserror::Error;

/// Errors that can occur while fetching or decoding upstream data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream throttled the request (HTTP 429).
    #[error("Rate limited: retry after {retry_after:?}")]
    RateLimited {
        /// Suggested time to wait before retrying, when known.
        retry_after: Option<std::time::Duration>,
    },

    /// The upstream had no data for the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A locally-detected bad input; no network call was made.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The response body could not be structurally decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The endpoint was reachable but reported an explicit error.
    #[error("Upstream error {code}: {message}")]
    Upstream {
        /// Error code reported by the endpoint (or the HTTP status).
        code: String,
        /// Human-readable description reported by the endpoint.
        message: String,
    },

    /// Anything not classified above.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`FetchError`].
///
/// Every fetch operation returns this; `is_ok`/`is_err` are exhaustive, and
/// `ok()` / `unwrap()` are the explicit opt-in points for discarding or
/// raising the failure.
pub type Result<T> = std::result::Result<T, FetchError>;
