use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog passthrough
        .route("/genres", get(handlers::get_genres))
        // Discovery
        .route("/movies/random", get(handlers::random_movie))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// Serves the static front-end for any path the API does not handle
pub fn with_frontend(router: Router, static_dir: &str) -> Router {
    router.fallback_service(ServeDir::new(static_dir))
}
