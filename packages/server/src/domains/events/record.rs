//! Event record normalization and validation.
//!
//! Editors submit loosely-typed rows from the dashboard. Normalization is
//! total: it coerces every row into a canonical `EventRecord` without ever
//! failing. Validation runs afterwards over the whole normalized list and
//! collects every field error before the caller decides anything; a single
//! error rejects the entire submission (the list is the unit of persistence,
//! there are no partial writes).

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Event identifier, kept as whatever the editor supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

/// A canonical event list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A single validation failure, addressed by record index and field name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub index: usize,
    pub field: &'static str,
    pub message: &'static str,
}

/// Coerce a raw array into canonical records. Never fails; one output record
/// per input element.
pub fn normalize_events(raw: &[Value]) -> Vec<EventRecord> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| normalize_one(index, value))
        .collect()
}

fn normalize_one(index: usize, value: &Value) -> EventRecord {
    let fallback_id = EventId::Number(index as i64 + 1);
    let id = match value.get("id") {
        Some(Value::String(s)) => EventId::Text(s.clone()),
        Some(Value::Number(n)) => n.as_i64().map(EventId::Number).unwrap_or(fallback_id),
        _ => fallback_id,
    };

    EventRecord {
        id,
        title: string_field(value, "title"),
        date: string_field(value, "date"),
        time: string_field(value, "time"),
        location: string_field(value, "location"),
        kind: string_field(value, "type"),
        image: optional_url_field(value, "image"),
        link: optional_url_field(value, "link"),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional URL fields survive normalization only as non-empty strings.
fn optional_url_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Check every record and collect all errors. Never short-circuits.
pub fn validate_events(records: &[EventRecord]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            errors.push(FieldError {
                index,
                field: "title",
                message: "Required",
            });
        }
        if !is_valid_date(&record.date) {
            errors.push(FieldError {
                index,
                field: "date",
                message: "Invalid date",
            });
        }
        if record.time.trim().is_empty() {
            errors.push(FieldError {
                index,
                field: "time",
                message: "Required",
            });
        }
        for (field, value) in [("image", &record.image), ("link", &record.link)] {
            if let Some(url) = value {
                if !is_http_url(url) {
                    errors.push(FieldError {
                        index,
                        field,
                        message: "Invalid URL",
                    });
                }
            }
        }
    }

    errors
}

fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_is_total() {
        let raw = vec![
            json!({"title": "Satsang", "date": "2025-12-01", "time": "6 PM"}),
            json!(null),
            json!(42),
            json!({"title": 7, "image": false}),
        ];

        let records = normalize_events(&raw);
        assert_eq!(records.len(), raw.len());
        for record in &records {
            // Every field coerced, URLs only kept as non-empty strings
            assert!(record.image.as_deref() != Some(""));
            assert!(record.link.as_deref() != Some(""));
        }
        assert_eq!(records[3].title, "");
        assert_eq!(records[3].image, None);
    }

    #[test]
    fn test_missing_id_assigned_from_index() {
        let raw = vec![json!({"title": "a"}), json!({"title": "b"})];
        let records = normalize_events(&raw);
        assert_eq!(records[0].id, EventId::Number(1));
        assert_eq!(records[1].id, EventId::Number(2));
    }

    #[test]
    fn test_existing_id_preserved() {
        let raw = vec![json!({"id": "abc"}), json!({"id": 99})];
        let records = normalize_events(&raw);
        assert_eq!(records[0].id, EventId::Text("abc".to_string()));
        assert_eq!(records[1].id, EventId::Number(99));
    }

    #[test]
    fn test_whitespace_title_is_required_error() {
        let records = normalize_events(&[json!({
            "title": "  ", "date": "2025-11-20", "time": "6 PM"
        })]);
        let errors = validate_events(&records);
        assert!(errors.contains(&FieldError {
            index: 0,
            field: "title",
            message: "Required",
        }));
    }

    #[test]
    fn test_date_validation() {
        let records = normalize_events(&[
            json!({"title": "a", "date": "not-a-date", "time": "6 PM"}),
            json!({"title": "b", "date": "2025-11-20", "time": "6 PM"}),
        ]);
        let errors = validate_events(&records);
        assert!(errors.contains(&FieldError {
            index: 0,
            field: "date",
            message: "Invalid date",
        }));
        assert!(!errors.iter().any(|e| e.index == 1));
    }

    #[test]
    fn test_link_scheme_validation() {
        let records = normalize_events(&[
            json!({"title": "a", "date": "2025-11-20", "time": "6 PM", "link": "ftp://x"}),
            json!({"title": "b", "date": "2025-11-20", "time": "6 PM", "link": "https://x.com"}),
        ]);
        let errors = validate_events(&records);
        assert_eq!(
            errors,
            vec![FieldError {
                index: 0,
                field: "link",
                message: "Invalid URL",
            }]
        );
    }

    #[test]
    fn test_all_errors_collected_across_records() {
        let records = normalize_events(&[
            json!({"title": "", "date": "nope", "time": ""}),
            json!({"title": "ok", "date": "2025-11-20", "time": "7 PM", "image": "gopher://x"}),
        ]);
        let errors = validate_events(&records);
        // Three failures on record 0, one on record 1 - nothing short-circuits
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.index == 1 && e.field == "image"));
    }

    #[test]
    fn test_roundtrip_serialization_omits_absent_urls() {
        let records = normalize_events(&[json!({
            "title": "Satsang", "date": "2025-12-01", "time": "6 PM"
        })]);
        let encoded = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(
            encoded,
            json!({
                "id": 1,
                "title": "Satsang",
                "date": "2025-12-01",
                "time": "6 PM",
                "location": "",
                "type": ""
            })
        );
    }
}
