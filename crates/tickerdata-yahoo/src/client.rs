//! The client type and shared transport plumbing.
//!
//! Every operation funnels through [`YahooClient::get_json`]: exactly one
//! round trip, with transport failures and non-success statuses folded into
//! the [`FetchError`] taxonomy before any body decoding happens.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use tickerdata_core::{FetchError, Result, Symbol};

/// User agent for HTTP requests.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Request timeout applied to every round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wait hint returned with a rate-limit failure.
const RATE_LIMIT_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Base URLs for the endpoint families the client talks to.
///
/// Overridable via [`YahooClient::with_base_urls`] so tests and proxies can
/// redirect requests without touching operation code.
#[derive(Clone, Debug)]
pub struct BaseUrls {
    /// Chart (price history) endpoint base.
    pub chart: String,
    /// Quote summary (modules) endpoint base.
    pub quote_summary: String,
    /// Options chain endpoint base.
    pub options: String,
    /// Search/news endpoint base.
    pub search: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            chart: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            quote_summary: "https://query2.finance.yahoo.com/v10/finance/quoteSummary".to_string(),
            options: "https://query1.finance.yahoo.com/v7/finance/options".to_string(),
            search: "https://query1.finance.yahoo.com/v1/finance/search".to_string(),
        }
    }
}

/// Typed Yahoo Finance client.
///
/// One instance owns one `reqwest::Client`; operations borrow it and never
/// share any other state, so concurrent per-symbol fetches need no
/// synchronization.
#[derive(Clone, Debug)]
pub struct YahooClient {
    http: reqwest::Client,
    base: BaseUrls,
}

impl YahooClient {
    /// Creates a client with default settings.
    #[must_use]
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            http,
            base: BaseUrls::default(),
        }
    }

    /// Creates a client using a custom HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            base: BaseUrls::default(),
        }
    }

    /// Creates a client with custom endpoint bases.
    #[must_use]
    pub fn with_base_urls(http: reqwest::Client, base: BaseUrls) -> Self {
        Self { http, base }
    }

    pub(crate) fn base_urls(&self) -> &BaseUrls {
        &self.base
    }

    /// Performs one GET round trip and decodes the JSON body.
    ///
    /// Status mapping: 429 becomes `RateLimited`, 404 becomes
    /// `SymbolNotFound`, any other non-success becomes `Upstream`. Transport
    /// failures become `Network`; body decode failures become `Parse`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        symbol: &Symbol,
    ) -> Result<T> {
        debug!("Fetching {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited {
                retry_after: Some(RATE_LIMIT_RETRY_AFTER),
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::SymbolNotFound(symbol.to_string()));
        }

        if !status.is_success() {
            return Err(FetchError::Upstream {
                code: status.as_u16().to_string(),
                message: format!("HTTP {status} for {symbol}"),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects blank or whitespace-bearing symbols before any network call.
pub(crate) fn validate_symbol(symbol: &Symbol) -> Result<()> {
    let s = symbol.as_str();
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(FetchError::InvalidParameter(format!(
            "symbol must be non-blank without whitespace, got {s:?}"
        )));
    }
    Ok(())
}

/// Explicit error object carried by the chart/quote-summary envelopes.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiError {
    pub(crate) code: Option<String>,
    pub(crate) description: Option<String>,
}

impl ApiError {
    /// Folds the upstream error payload into the taxonomy, keeping the
    /// upstream's own code and message verbatim.
    pub(crate) fn into_upstream(self) -> FetchError {
        FetchError::Upstream {
            code: self.code.unwrap_or_else(|| "unknown".to_string()),
            message: self.description.unwrap_or_default(),
        }
    }
}
