//! Summary API Client
//!
//! HTTP client for the GRC-MMAP dashboard endpoints.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use thiserror::Error;

use super::{ControlMaturityEntry, DashboardSummary};

/// Path of the compliance status endpoint, relative to the summary URL
pub const COMPLIANCE_STATUS_PATH: &str = "compliance/status";

/// Anything that can produce a dashboard summary
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Where the summary comes from, for logging
    fn endpoint(&self) -> &str;

    /// Fetch the summary once
    async fn fetch_summary(&self) -> Result<DashboardSummary, FetchError>;
}

/// Summary client backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpSummaryClient {
    client: Client,
    url: Url,
}

impl HttpSummaryClient {
    /// Create a client for the given summary URL
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            error: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { client, url })
    }

    /// URL of the summary endpoint
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// URL of the compliance status endpoint, next to the summary endpoint
    ///
    /// `.../dashboard/summary` becomes `.../dashboard/compliance/status`, so
    /// any path prefix in front of `dashboard` is kept.
    pub fn compliance_status_url(&self) -> Result<Url, FetchError> {
        self.url
            .join(COMPLIANCE_STATUS_PATH)
            .map_err(|e| FetchError::InvalidUrl {
                url: self.url.to_string(),
                error: e.to_string(),
            })
    }

    /// Fetch the per-control finding counts only
    pub async fn fetch_compliance_status(&self) -> Result<Vec<ControlMaturityEntry>, FetchError> {
        let url = self.compliance_status_url()?;
        self.get_json(url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&bytes).map_err(FetchError::Malformed)
    }
}

#[async_trait]
impl SummarySource for HttpSummaryClient {
    fn endpoint(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch_summary(&self) -> Result<DashboardSummary, FetchError> {
        self.get_json(self.url.clone()).await
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Unavailable
    } else {
        FetchError::Request(e)
    }
}

/// Errors that can occur while fetching dashboard data
///
/// The dashboard view does not tell these apart; they are kept separate for
/// the logs.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL {url}: {error}")]
    InvalidUrl { url: String, error: String },

    #[error("Dashboard API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
