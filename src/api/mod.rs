pub mod extract;
pub mod server;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// 构建应用路由
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/version", get(server::get_version_info))
        .route(
            "/api/extract",
            get(extract::extract_get).post(extract::extract_post),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
