//! HTTP client for the primary content backend.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::common::Locale;
use crate::domains::content::{PageLayout, PageSummary};

/// Request budget for backend calls. When it elapses, reqwest drops the
/// in-flight request, so a late backend response is discarded with it.
pub const BACKEND_TIMEOUT_MS: u64 = 3000;

/// Client for the content backend's REST API.
pub struct ContentBackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentBackendClient {
    /// Create a client with the standard request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_millis(BACKEND_TIMEOUT_MS))
    }

    /// Create a client with an explicit timeout (tests use a short one).
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the summary list for a locale.
    pub async fn fetch_summaries(&self, locale: Locale) -> Result<Vec<PageSummary>> {
        let url = format!("{}/api/content/{}/pages", self.base_url, locale);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("content backend request failed")?;

        if !response.status().is_success() {
            bail!("content backend returned {}", response.status());
        }

        response
            .json()
            .await
            .context("invalid page summary payload")
    }

    /// Fetch one page's full layout.
    pub async fn fetch_page(&self, locale: Locale, page_id: &str) -> Result<PageLayout> {
        let url = format!("{}/api/content/{}/pages/{}", self.base_url, locale, page_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("content backend request failed")?;

        if !response.status().is_success() {
            bail!("content backend returned {}", response.status());
        }

        response.json().await.context("invalid page layout payload")
    }

    /// Replace one component's content payload.
    pub async fn update_component(
        &self,
        locale: Locale,
        page_id: &str,
        component_id: &str,
        content: &serde_json::Map<String, Value>,
    ) -> Result<()> {
        let url = format!(
            "{}/api/content/{}/pages/{}/components/{}",
            self.base_url, locale, page_id, component_id
        );
        let response = self
            .client
            .patch(&url)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await
            .context("content backend request failed")?;

        if !response.status().is_success() {
            bail!("content backend returned {}", response.status());
        }

        Ok(())
    }
}
