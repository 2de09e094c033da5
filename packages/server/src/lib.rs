// Satsang Site - Content Core
//
// Backend for the bilingual content site: durable event-list storage and
// page-content resolution with a built-in fallback when the primary content
// backend is unavailable.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
