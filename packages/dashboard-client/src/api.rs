//! Typed REST client for the site API.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DashboardError, Result};
use crate::types::{ContentSource, PageLayout, PageSummary, CONTENT_SOURCE_HEADER};

/// Error body shape shared by all site API endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Page list plus the provenance the server reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PagesResponse {
    pub pages: Vec<PageSummary>,
    pub source: ContentSource,
}

/// Client for the site API consumed by the dashboard.
#[derive(Clone)]
pub struct DashboardApi {
    client: reqwest::Client,
    base_url: String,
}

impl DashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Extract the server-reported `{error}` message, or fall back to the
    /// HTTP status.
    async fn api_error(response: reqwest::Response) -> DashboardError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => DashboardError::Api(body.error),
            Err(_) => DashboardError::Api(format!("Request failed with {}", status)),
        }
    }

    /// Fetch the page list for a locale, with provenance.
    pub async fn list_pages(&self, locale: &str) -> Result<PagesResponse> {
        let url = format!("{}/api/content/{}/pages", self.base_url, locale);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let source = response
            .headers()
            .get(CONTENT_SOURCE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ContentSource::from_header)
            .unwrap_or_default();

        let pages = response
            .json()
            .await
            .map_err(|e| DashboardError::Parse(e.to_string()))?;

        Ok(PagesResponse { pages, source })
    }

    /// Fetch one page's full layout.
    pub async fn get_page(&self, locale: &str, page_id: &str) -> Result<PageLayout> {
        let url = format!("{}/api/content/{}/pages/{}", self.base_url, locale, page_id);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::Parse(e.to_string()))
    }

    /// Replace one component's content payload.
    pub async fn update_component(
        &self,
        locale: &str,
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
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }
}
