//! Client-side state controller for the content dashboard.
//!
//! One orchestrator serves one active locale. Every operation is terminal for
//! its request: failures set the error field and nothing retries. Overlapping
//! requests of the same kind are allowed; each carries a sequence number and a
//! completion whose sequence is no longer current is discarded wholesale, so
//! the last *issued* request determines the final state even when an earlier
//! one resolves later.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::warn;

use crate::api::DashboardApi;
use crate::error::DashboardError;
use crate::types::{ContentSource, PageLayout, PageSummary};

/// Snapshot of the dashboard's content state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrchestratorState {
    pub pages: Vec<PageSummary>,
    pub selected_page: Option<PageLayout>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    /// True when the current page list came from the built-in fallback table.
    /// Derived per response from the provenance header, never cached.
    pub using_fallback: bool,
}

/// Drives page-list fetch, page-detail fetch, and component updates, exposing
/// loading/saving/error/provenance state to the UI.
pub struct ContentOrchestrator {
    api: DashboardApi,
    locale: Mutex<String>,
    state: Mutex<OrchestratorState>,
    pages_seq: AtomicU64,
    page_seq: AtomicU64,
}

impl ContentOrchestrator {
    pub fn new(api: DashboardApi, locale: impl Into<String>) -> Self {
        Self {
            api,
            locale: Mutex::new(locale.into()),
            state: Mutex::new(OrchestratorState::default()),
            pages_seq: AtomicU64::new(0),
            page_seq: AtomicU64::new(0),
        }
    }

    /// Current state snapshot.
    pub async fn state(&self) -> OrchestratorState {
        self.state.lock().await.clone()
    }

    pub async fn locale(&self) -> String {
        self.locale.lock().await.clone()
    }

    /// Switch locale, dropping all loaded content, and refetch the page list.
    pub async fn set_locale(&self, locale: impl Into<String>) {
        *self.locale.lock().await = locale.into();
        {
            let mut state = self.state.lock().await;
            state.pages.clear();
            state.selected_page = None;
            state.using_fallback = false;
        }
        self.fetch_pages().await;
    }

    /// Fetch the page list for the active locale.
    pub async fn fetch_pages(&self) {
        let seq = self.pages_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.error = None;
        }

        let locale = self.locale().await;
        let result = self.api.list_pages(&locale).await;

        let mut state = self.state.lock().await;
        if seq != self.pages_seq.load(Ordering::SeqCst) {
            // A newer fetch was issued while this one was in flight
            return;
        }
        match result {
            Ok(response) => {
                state.pages = response.pages;
                state.using_fallback = response.source == ContentSource::Fallback;
            }
            Err(error) => {
                warn!(locale = %locale, error = %error, "page list fetch failed");
                state.error = Some("Failed to load pages".to_string());
            }
        }
        state.loading = false;
    }

    /// Fetch one page's full layout into `selected_page`.
    pub async fn fetch_page(&self, page_id: &str) {
        let seq = self.page_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.error = None;
        }

        let locale = self.locale().await;
        let result = self.api.get_page(&locale, page_id).await;

        let mut state = self.state.lock().await;
        if seq != self.page_seq.load(Ordering::SeqCst) {
            return;
        }
        match result {
            Ok(page) => {
                state.selected_page = Some(page);
            }
            Err(error) => {
                warn!(locale = %locale, page_id = %page_id, error = %error, "page fetch failed");
                state.error = Some("Failed to load page".to_string());
            }
        }
        state.loading = false;
    }

    /// Save one component's content, then refetch the page so the UI shows
    /// the server's canonical state rather than a client-side merge. Returns
    /// whether the save succeeded; on failure `selected_page` is untouched.
    pub async fn update_component(
        &self,
        page_id: &str,
        component_id: &str,
        content: &serde_json::Map<String, Value>,
    ) -> bool {
        {
            let mut state = self.state.lock().await;
            state.saving = true;
            state.error = None;
        }

        let locale = self.locale().await;
        let result = self
            .api
            .update_component(&locale, page_id, component_id, content)
            .await;

        match result {
            Ok(()) => {
                self.state.lock().await.saving = false;
                self.fetch_page(page_id).await;
                true
            }
            Err(error) => {
                warn!(
                    locale = %locale,
                    page_id = %page_id,
                    component_id = %component_id,
                    error = %error,
                    "component update failed"
                );
                let message = match error {
                    // Server-reported message, e.g. "Failed to update component"
                    DashboardError::Api(message) => message,
                    _ => "Failed to update component".to_string(),
                };
                let mut state = self.state.lock().await;
                state.error = Some(message);
                state.saving = false;
                false
            }
        }
    }
}
