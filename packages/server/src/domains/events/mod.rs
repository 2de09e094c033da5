//! Editable event list: normalization, validation, and per-locale storage.

pub mod record;
pub mod store;

pub use record::{normalize_events, validate_events, EventId, EventRecord, FieldError};
pub use store::{EventStore, StoreError};
