//! HTTP client for the venue API, plus the helpers the terminal UI uses.
//!
//! Responses are cached per request URL until [`DashboardClient::invalidate`]
//! is called, so paging back and forth over the same filters does not hit the
//! server again.

pub mod dma;
pub mod filters;
pub mod pagination;
pub mod render;
pub mod smart_search;

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;

pub use filters::Filters;

use crate::domain::{FilterOptions, Health, VenuePage, VenueSummary};
use crate::error::ErrorBody;

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} {code}: {message}")]
    Api { status: u16, code: String, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for one venue API server.
pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
    cache: Mutex<HashMap<String, serde_json::Value>>,
}

impl DashboardClient {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:4000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build().map_err(ClientError::Build)?;

        // Ensure base URL doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        self.fetch("/api/health", String::new()).await
    }

    /// Distinct values for the filter controls.
    pub async fn options(&self) -> Result<FilterOptions, ClientError> {
        self.fetch("/api/options", String::new()).await
    }

    /// One page of venues.
    pub async fn venues(&self, filters: &Filters) -> Result<VenuePage, ClientError> {
        self.fetch("/api/pois", filters.to_query_string()).await
    }

    /// Totals for the filter fields of `filters`; paging and sort are dropped.
    pub async fn summary(&self, filters: &Filters) -> Result<VenueSummary, ClientError> {
        self.fetch("/api/summary", filters.summary_filters().to_query_string()).await
    }

    /// Forget every cached response.
    pub async fn invalidate(&self) {
        self.cache.lock().await.clear();
    }

    /// Number of cached responses.
    pub async fn cached_responses(&self) -> usize {
        self.cache.lock().await.len()
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: String) -> Result<T, ClientError> {
        let url = if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        };

        if let Some(cached) = self.cache.lock().await.get(&url).cloned() {
            tracing::trace!(%url, "cache hit");
            return Ok(serde_json::from_value(cached)?);
        }

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => ClientError::Api {
                    status: status.as_u16(),
                    code: body.error.code,
                    message: body.error.message,
                },
                Err(_) => ClientError::Api {
                    status: status.as_u16(),
                    code: status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
                    message: String::from_utf8_lossy(&bytes).into_owned(),
                },
            });
        }

        let value: serde_json::Value = response.json().await?;
        let parsed = serde_json::from_value(value.clone())?;
        self.cache.lock().await.insert(url, value);
        Ok(parsed)
    }
}

impl ClientError {
    /// Error code reported by the server, if the failure came from one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
