use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::common::Locale;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    storage: StorageHealth,
}

#[derive(Serialize)]
pub struct StorageHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Probes the default locale's event store. Returns 200 OK when storage is
/// readable, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.events.read(Locale::DEFAULT).await {
        Ok(_) => StorageHealth {
            status: "ok".to_string(),
            error: None,
        },
        Err(e) => StorageHealth {
            status: "error".to_string(),
            error: Some(e.to_string()),
        },
    };

    let is_healthy = storage.status == "ok";

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            storage,
        }),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::server::build_app;

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
    async fn test_unhealthy_without_storage() {
        let dir = tempfile::tempdir().unwrap();
        let base = spawn_app(dir.path()).await;

        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status(), 503);
        let body = response.json::<Value>().await.unwrap();
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_healthy_with_seeded_storage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("events.en.json"),
            serde_json::to_vec(&json!({"items": []})).unwrap(),
        )
        .unwrap();
        let base = spawn_app(dir.path()).await;

        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status(), 200);
        let body = response.json::<Value>().await.unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
