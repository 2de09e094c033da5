//! Supported site locales.
//!
//! The site ships exactly two locales. Read paths silently coerce anything
//! else to English; the event write path rejects unknown codes instead, so
//! that a typo never creates a phantom store file. Keep the two behaviors
//! separate.

use std::fmt;

/// A supported locale code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    /// Default locale used when coercing unknown codes.
    pub const DEFAULT: Locale = Locale::En;

    /// Strict parse: `None` for anything outside the supported set.
    pub fn parse(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            _ => None,
        }
    }

    /// Lenient parse: unknown codes map to the default locale.
    pub fn coerce(code: &str) -> Locale {
        Locale::parse(code).unwrap_or(Locale::DEFAULT)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
