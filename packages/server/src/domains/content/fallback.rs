//! Built-in page list served when the content backend is unreachable.
//!
//! Deliberately minimal and hard-coded: the page must always render a
//! navigable list, even during a backend cold start or outage. If the
//! backend's page set changes, this table lags behind until updated by hand;
//! callers treat fallback provenance as incomplete data, not wrong data.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::common::Locale;

use super::types::PageSummary;

fn summary(page_id: &str, name: &str, path: &str) -> PageSummary {
    PageSummary {
        page_id: page_id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
    }
}

lazy_static! {
    static ref FALLBACK_PAGES: HashMap<Locale, Vec<PageSummary>> = {
        let mut pages = HashMap::new();
        pages.insert(
            Locale::En,
            vec![
                summary("home", "Home", "/"),
                summary("about", "About", "/about"),
                summary("events", "Events", "/events"),
                summary("gallery", "Gallery", "/gallery"),
                summary("contact", "Contact", "/contact"),
            ],
        );
        pages.insert(
            Locale::Hi,
            vec![
                summary("home", "होम", "/hi"),
                summary("about", "परिचय", "/hi/about"),
                summary("events", "कार्यक्रम", "/hi/events"),
                summary("gallery", "गैलरी", "/hi/gallery"),
                summary("contact", "संपर्क", "/hi/contact"),
            ],
        );
        pages
    };
}

/// Fallback page list for a locale; English if the locale has no entry.
pub fn fallback_summaries(locale: Locale) -> &'static [PageSummary] {
    FALLBACK_PAGES
        .get(&locale)
        .or_else(|| FALLBACK_PAGES.get(&Locale::DEFAULT))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_locales_have_entries() {
        assert!(!fallback_summaries(Locale::En).is_empty());
        assert!(!fallback_summaries(Locale::Hi).is_empty());
    }

    #[test]
    fn test_entries_are_stable_across_calls() {
        assert_eq!(fallback_summaries(Locale::En), fallback_summaries(Locale::En));
    }
}
