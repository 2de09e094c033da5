//! Wire types shared with the content backend and the dashboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response header carrying the provenance of resolved page data.
pub const CONTENT_SOURCE_HEADER: &str = "x-content-source";

/// Where a resolved response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Live data from the primary content backend.
    Api,
    /// Built-in seed data substituted after a backend failure.
    Fallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Api => "api",
            ContentSource::Fallback => "fallback",
        }
    }
}

/// One navigable page in a locale's page list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: String,
    pub name: String,
    pub path: String,
}

/// Full page detail as served by the content backend. There is no fallback
/// equivalent for this shape; only the summary list has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub page_id: String,
    pub locale: String,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentContent>,
}

/// The mutable payload edited via the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentContent {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content: serde_json::Map<String, Value>,
}
