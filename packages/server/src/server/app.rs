//! Application setup and router configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, patch},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::content::PageContentResolver;
use crate::domains::events::EventStore;
use crate::kernel::ContentBackendClient;
use crate::server::routes::{
    get_events, get_page, health_handler, list_pages, patch_component, put_events,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventStore>,
    pub resolver: Arc<PageContentResolver>,
    pub backend: Arc<ContentBackendClient>,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Result<Router> {
    let backend = Arc::new(ContentBackendClient::new(config.content_api_url.clone())?);
    let resolver = Arc::new(PageContentResolver::new(backend.clone()));
    let events = Arc::new(EventStore::new(&config.data_dir));

    let state = AppState {
        events,
        resolver,
        backend,
    };

    // CORS - the dashboard is served from a different origin in development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::PUT, Method::PATCH])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/events/:locale", get(get_events).put(put_events))
        .route("/api/content/:locale/pages", get(list_pages))
        .route("/api/content/:locale/pages/:page_id", get(get_page))
        .route(
            "/api/content/:locale/pages/:page_id/components/:component_id",
            patch(patch_component),
        )
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
