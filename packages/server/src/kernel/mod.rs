//! Clients for external services.

pub mod content_backend;

pub use content_backend::ContentBackendClient;
