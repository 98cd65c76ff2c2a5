//! Axum router configuration with middleware.
//!
//! API routes live under `/api/`. Middleware (CORS, tracing) wraps every
//! route, the static fallback included.
//!
//! The frontend bundle is served from the configured web directory
//! (`public/` unless overridden). API routes take priority; unknown paths
//! fall through to the bundle's `index.html` for client-side routing. If the
//! directory does not exist, only the API is served.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Served with and without the trailing slash.
    let api_routes = Router::new()
        .route("/appraise/", post(handlers::appraisal::appraise))
        .route("/appraise", post(handlers::appraisal::appraise));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check));

    // Layers are applied after the fallback so they wrap it as well.
    if web_dir.exists() {
        let serve_dir = ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "Static file serving enabled");
    } else {
        tracing::debug!(path = %web_dir.display(), "Web directory missing, serving API only");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
