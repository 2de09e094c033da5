//! Summary resolution: live backend first, built-in fallback on any failure.
//!
//! The trade is a small amount of latency for availability. A slow or down
//! backend costs at most the request timeout, after which the fixed page list
//! keeps the site navigable. Only the summary list has this safety net; page
//! detail and component updates fail upstream-style instead.

use std::sync::Arc;

use tracing::warn;

use crate::common::Locale;
use crate::kernel::ContentBackendClient;

use super::fallback::fallback_summaries;
use super::types::{ContentSource, PageSummary};

/// A resolved summary list plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSummaries {
    pub pages: Vec<PageSummary>,
    pub source: ContentSource,
}

/// Resolves page summaries from the backend, substituting the fallback table
/// when the backend errors, times out, or returns garbage.
pub struct PageContentResolver {
    backend: Arc<ContentBackendClient>,
}

impl PageContentResolver {
    pub fn new(backend: Arc<ContentBackendClient>) -> Self {
        Self { backend }
    }

    /// Resolve the summary list for an already-coerced locale. Infallible:
    /// every failure path lands on the fallback table.
    pub async fn resolve_summaries(&self, locale: Locale) -> ResolvedSummaries {
        match self.backend.fetch_summaries(locale).await {
            Ok(pages) => ResolvedSummaries {
                pages,
                source: ContentSource::Api,
            },
            Err(error) => {
                warn!(
                    locale = %locale,
                    error = %error,
                    "content backend unavailable, serving fallback pages"
                );
                ResolvedSummaries {
                    pages: fallback_summaries(locale).to_vec(),
                    source: ContentSource::Fallback,
                }
            }
        }
    }
}
