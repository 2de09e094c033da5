//! Shared building blocks used across domains.

pub mod locale;

pub use locale::Locale;
