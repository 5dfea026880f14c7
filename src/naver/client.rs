//! HTTP client for the Naver Shopping search API.

use crate::naver::models::{SearchResponse, Sort};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

const NAVER_OPENAPI_BASE: &str = "https://openapi.naver.com";

/// Result-count bounds accepted by the API.
pub const MIN_DISPLAY: u32 = 10;
pub const MAX_DISPLAY: u32 = 100;

/// Trait for shopping search - enables mocking for tests.
#[async_trait]
pub trait NaverSearch: Send + Sync {
    /// Performs one search and returns the parsed response.
    async fn search(&self, query: &str, display: u32, sort: Sort) -> Result<SearchResponse>;
}

/// Naver open-API client. Credentials travel as request headers.
pub struct NaverClient {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
}

impl NaverClient {
    /// Creates a new client with the given credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_base_url(client_id, client_secret, NAVER_OPENAPI_BASE.to_string())
    }

    /// Creates a new client with a custom base URL (for testing).
    pub fn with_base_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, client_id: client_id.into(), client_secret: client_secret.into(), base_url })
    }
}

#[async_trait]
impl NaverSearch for NaverClient {
    async fn search(&self, query: &str, display: u32, sort: Sort) -> Result<SearchResponse> {
        // Named `display_count` because `display` collides with
        // `tracing::field::display` inside the `info!` expansion.
        let display_count = display.clamp(MIN_DISPLAY, MAX_DISPLAY);
        let url = format!(
            "{}/v1/search/shop.json?query={}&display={}&sort={}",
            self.base_url,
            urlencoding::encode(query),
            display_count,
            sort.as_param()
        );

        info!(
            "Searching: {} (display {}, sort {})",
            query, display_count, sort
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            warn!("Credentials rejected ({})", status);
            anyhow::bail!(
                "API rejected credentials (status {}). Check client id/secret.",
                status
            );
        }

        if !status.is_success() {
            anyhow::bail!("Search request failed with status: {}", status);
        }

        let body = response.text().await.context("Failed to read response body")?;
        serde_json::from_str(&body).context("Failed to parse search response")
    }
}
