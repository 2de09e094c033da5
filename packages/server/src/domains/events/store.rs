//! Per-locale flat-file storage for the event list.
//!
//! Each locale owns one JSON file (`events.<locale>.json`) under the data
//! directory. The whole list is the unit of persistence: a write replaces the
//! file via temp-file-then-rename, so a concurrent reader sees either the old
//! list or the new one, never a partial list. At most one writer per locale is
//! assumed; overlapping writers race and the last rename wins.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::common::Locale;

use super::record::EventRecord;

/// Errors from the event store. All terminal; callers surface a generic
/// message and log the detail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read event storage: {0}")]
    Read(std::io::Error),
    #[error("event storage is corrupt: {0}")]
    Corrupt(serde_json::Error),
    #[error("failed to encode event list: {0}")]
    Encode(serde_json::Error),
    #[error("failed to write event storage: {0}")]
    Write(std::io::Error),
}

/// On-disk shape, mirroring the wire shape of the events endpoint.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEvents {
    items: Vec<EventRecord>,
}

/// Flat-file event store rooted at a data directory.
pub struct EventStore {
    data_dir: PathBuf,
}

impl EventStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, locale: Locale) -> PathBuf {
        self.data_dir.join(format!("events.{}.json", locale))
    }

    /// Load the stored list for a locale, verbatim.
    pub async fn read(&self, locale: Locale) -> Result<Vec<EventRecord>, StoreError> {
        let path = self.path_for(locale);
        let bytes = fs::read(&path).await.map_err(StoreError::Read)?;
        let stored: StoredEvents = serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)?;
        Ok(stored.items)
    }

    /// Replace a locale's stored list with a fully validated one.
    pub async fn write(&self, locale: Locale, items: &[EventRecord]) -> Result<(), StoreError> {
        let stored = StoredEvents {
            items: items.to_vec(),
        };
        let body = serde_json::to_vec_pretty(&stored).map_err(StoreError::Encode)?;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(StoreError::Write)?;

        let path = self.path_for(locale);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).await.map_err(StoreError::Write)?;
        fs::rename(&tmp, &path).await.map_err(StoreError::Write)?;

        debug!(locale = %locale, count = items.len(), "event list persisted");
        Ok(())
    }
}
