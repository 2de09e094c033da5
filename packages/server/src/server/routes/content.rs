//! Page content endpoints.
//!
//! The summary list always answers 200: backend failures substitute the
//! built-in fallback table, with provenance reported in a response header.
//! Page detail and component updates have no fallback; their backend failures
//! surface as 502 with a generic message.

use axum::{
    extract::{Extension, Path},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::common::Locale;
use crate::domains::content::CONTENT_SOURCE_HEADER;
use crate::server::app::AppState;

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// `GET /api/content/:locale/pages` - resolved summary list, never cached.
pub async fn list_pages(
    Path(locale): Path<String>,
    Extension(state): Extension<AppState>,
) -> Response {
    let locale = Locale::coerce(&locale);
    let resolved = state.resolver.resolve_summaries(locale).await;

    let mut response = (StatusCode::OK, Json(resolved.pages)).into_response();
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_SOURCE_HEADER,
        HeaderValue::from_static(resolved.source.as_str()),
    );
    // The backend is the source of truth; intermediaries must not cache
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// `GET /api/content/:locale/pages/:page_id` - backend pass-through.
pub async fn get_page(
    Path((locale, page_id)): Path<(String, String)>,
    Extension(state): Extension<AppState>,
) -> Response {
    let locale = Locale::coerce(&locale);

    match state.backend.fetch_page(locale, &page_id).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => {
            error!(locale = %locale, page_id = %page_id, error = %e, "page fetch failed");
            error_response(StatusCode::BAD_GATEWAY, "Failed to load page")
        }
    }
}

/// `PATCH /api/content/:locale/pages/:page_id/components/:component_id`
pub async fn patch_component(
    Path((locale, page_id, component_id)): Path<(String, String, String)>,
    Extension(state): Extension<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let locale = Locale::coerce(&locale);

    let Some(content) = body.get("content").and_then(Value::as_object) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid payload");
    };

    match state
        .backend
        .update_component(locale, &page_id, &component_id, content)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(OkResponse { ok: true })).into_response(),
        Err(e) => {
            error!(
                locale = %locale,
                page_id = %page_id,
                component_id = %component_id,
                error = %e,
                "component update failed"
            );
            error_response(StatusCode::BAD_GATEWAY, "Failed to update component")
        }
    }
}
