//! Wire types mirrored from the site API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response header carrying the provenance of resolved page data.
pub const CONTENT_SOURCE_HEADER: &str = "x-content-source";

/// Where a page-list response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// Live data from the content backend.
    #[default]
    Api,
    /// Built-in seed data; treat as incomplete, not wrong.
    Fallback,
}

impl ContentSource {
    pub fn from_header(value: &str) -> ContentSource {
        match value {
            "fallback" => ContentSource::Fallback,
            _ => ContentSource::Api,
        }
    }
}

/// One navigable page in the current locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: String,
    pub name: String,
    pub path: String,
}

/// Full page detail with its editable components.
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

/// A single editable component on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentContent {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content: serde_json::Map<String, Value>,
}
