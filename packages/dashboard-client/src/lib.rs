//! Dashboard-side client for the content site API.
//!
//! `DashboardApi` is a thin typed client over the site's REST endpoints.
//! `ContentOrchestrator` sits on top of it and tracks the loading, saving,
//! error, and data-provenance state the dashboard UI renders from.

pub mod api;
pub mod error;
pub mod orchestrator;
pub mod types;

pub use api::{DashboardApi, PagesResponse};
pub use error::{DashboardError, Result};
pub use orchestrator::{ContentOrchestrator, OrchestratorState};
pub use types::{ComponentContent, ContentSource, PageLayout, PageSummary};
