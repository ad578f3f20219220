//! Internal routes for health checks and template cache administration.

use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

/// Create the internal routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/templates", get(template_stats))
        .route("/templates/clear", post(clear_templates))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn template_stats(State(state): State<AppState>) -> impl IntoResponse {
    let cache = state.renderer.cache();
    let stats = cache.stats();

    Json(json!({
        "use_cache": state.renderer.use_cache(),
        "hit_rate": stats.hit_rate(),
        "stats": stats,
        "cached": cache.names(),
    }))
}

async fn clear_templates(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = state.renderer.clear();
    info!(cleared, "Template cache cleared");

    Json(json!({
        "status": "ok",
        "cleared": cleared
    }))
}
