use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppResult;
use crate::models::{CacheStats, Recommendation};
use crate::services::recommender::DEFAULT_K;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub movie_name: String,
    /// Defaults to 5 when omitted
    pub num_recommendations: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub selected_movie: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub count: usize,
    pub movies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub cache_info: CacheStats,
}

// Handlers

/// Service banner with an endpoint listing
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Movie Recommender API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/movies": "GET - List all movies",
            "/recommend": "POST - Get movie recommendations",
            "/health": "GET - Health check with cache statistics",
            "/cache/clear": "GET - Clear the recommendation cache",
        }
    }))
}

/// Lists every title in the catalog, alphabetically
pub async fn get_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let mut movies: Vec<String> = state.catalog().titles().to_vec();
    movies.sort();
    Json(MoviesResponse {
        count: movies.len(),
        movies,
    })
}

/// Returns the top similar movies for the requested title
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    let k = request.num_recommendations.unwrap_or(DEFAULT_K);
    let recommendations = state.cache.get(&request.movie_name, k).await?;

    Ok(Json(RecommendResponse {
        selected_movie: request.movie_name,
        recommendations,
    }))
}

/// Health check with model and cache visibility
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        // State construction requires loaded artifacts, so reaching this
        // handler implies the model is in memory.
        model_loaded: true,
        cache_info: state.cache.stats().await,
    })
}

/// Empties the recommendation cache
pub async fn clear_cache(State(state): State<AppState>) -> Json<Value> {
    state.cache.clear().await;
    info!("recommendation cache cleared");
    Json(json!({
        "message": "Cache cleared successfully",
        "cache_info": state.cache.stats().await,
    }))
}
