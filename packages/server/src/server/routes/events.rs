//! Event list endpoints.
//!
//! Reads coerce unknown locales to English; writes reject them. A write
//! replaces the whole list and is all-or-nothing: any validation error on any
//! record rejects the submission without touching storage.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::common::Locale;
use crate::domains::events::{normalize_events, validate_events, EventRecord, FieldError};
use crate::server::app::AppState;

#[derive(Serialize)]
struct EventListResponse {
    items: Vec<EventRecord>,
}

#[derive(Serialize)]
struct WriteOkResponse {
    ok: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message,
            errors: None,
        }),
    )
        .into_response()
}

/// `GET /api/events/:locale` - the stored list, verbatim.
pub async fn get_events(
    Path(locale): Path<String>,
    Extension(state): Extension<AppState>,
) -> Response {
    let locale = Locale::coerce(&locale);

    match state.events.read(locale).await {
        Ok(items) => (StatusCode::OK, Json(EventListResponse { items })).into_response(),
        Err(e) => {
            error!(locale = %locale, error = %e, "event store read failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load events")
        }
    }
}

/// `PUT /api/events/:locale` - validate and replace the stored list.
pub async fn put_events(
    Path(locale): Path<String>,
    Extension(state): Extension<AppState>,
    Json(body): Json<Value>,
) -> Response {
    // Strict on writes: a typoed locale must not create a new store file
    let Some(locale) = Locale::parse(&locale) else {
        return error_response(StatusCode::BAD_REQUEST, "Unsupported locale");
    };

    let Some(raw) = body.get("items").and_then(Value::as_array) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid payload");
    };

    let records = normalize_events(raw);
    let errors = validate_events(&records);
    if !errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Validation failed",
                errors: Some(errors),
            }),
        )
            .into_response();
    }

    match state.events.write(locale, &records).await {
        Ok(()) => (StatusCode::OK, Json(WriteOkResponse { ok: true })).into_response(),
        Err(e) => {
            error!(locale = %locale, error = %e, "event store write failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save events")
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::server::build_app;

    /// Spawn the full app backed by a temp data dir and a dead content
    /// backend, and return its base URL.
    async fn spawn_app(data_dir: &std::path::Path) -> String {
        let config = Config {
            port: 0,
            data_dir: data_dir.to_string_lossy().to_string(),
            content_api_url: "http://127.0.0.1:9".to_string(),
        };
        let app = build_app(&config).unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;
        let client = reqwest::Client::new();

        let response = client
            .put(format!("{}/api/events/en", base))
            .json(&json!({"items": [{"title": "Satsang", "date": "2025-12-01", "time": "6 PM"}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.json::<Value>().await.unwrap(), json!({"ok": true}));

        let response = client
            .get(format!("{}/api/events/en", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"items": [{
                "id": 1,
                "title": "Satsang",
                "date": "2025-12-01",
                "time": "6 PM",
                "location": "",
                "type": ""
            }]})
        );
    }

    #[tokio::test]
    async fn test_validation_failure_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;
        let client = reqwest::Client::new();

        let good = json!({"items": [{"title": "Satsang", "date": "2025-12-01", "time": "6 PM"}]});
        client
            .put(format!("{}/api/events/en", base))
            .json(&good)
            .send()
            .await
            .unwrap();

        let response = client
            .put(format!("{}/api/events/en", base))
            .json(&json!({"items": [{"title": "", "date": "2025-12-01", "time": "6 PM"}]}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body = response.json::<Value>().await.unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["errors"],
            json!([{"index": 0, "field": "title", "message": "Required"}])
        );

        // Stored state is still the previous list
        let stored = client
            .get(format!("{}/api/events/en", base))
            .send()
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap();
        assert_eq!(stored["items"][0]["title"], "Satsang");
    }

    #[tokio::test]
    async fn test_write_rejects_unsupported_locale() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;

        let response = reqwest::Client::new()
            .put(format!("{}/api/events/fr", base))
            .json(&json!({"items": []}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"error": "Unsupported locale"})
        );
    }

    #[tokio::test]
    async fn test_write_rejects_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;

        let response = reqwest::Client::new()
            .put(format!("{}/api/events/en", base))
            .json(&json!({"rows": []}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"error": "Invalid payload"})
        );
    }

    #[tokio::test]
    async fn test_read_coerces_unknown_locale_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;
        let client = reqwest::Client::new();

        client
            .put(format!("{}/api/events/en", base))
            .json(&json!({"items": [{"title": "Satsang", "date": "2025-12-01", "time": "6 PM"}]}))
            .send()
            .await
            .unwrap();

        let stored = client
            .get(format!("{}/api/events/fr", base))
            .send()
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap();
        assert_eq!(stored["items"][0]["title"], "Satsang");
    }

    #[tokio::test]
    async fn test_read_of_missing_store_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/events/hi", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"error": "Failed to load events"})
        );
    }
}
