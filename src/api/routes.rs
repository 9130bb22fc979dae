use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// CORS is permissive so browser frontends can call the API directly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/movies", get(handlers::get_movies))
        .route("/recommend", post(handlers::recommend))
        .route("/health", get(handlers::health_check))
        .route("/cache/clear", get(handlers::clear_cache))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
