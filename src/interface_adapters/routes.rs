use crate::interface_adapters::handlers::identify::identify;
use crate::interface_adapters::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>, body_limit_bytes: usize) -> Router {
    // Image payloads are large; the limit is applied to the JSON extractor.
    Router::new()
        .route("/api/identify", post(identify))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
