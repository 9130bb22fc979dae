use std::sync::Arc;

use crate::services::{Catalog, RecommendationCache, Recommender, SimilarityMatrix};

/// Shared application state
///
/// Everything here is built once at startup. The catalog and matrix are
/// read-only; the cache manages its own interior locking, so handlers
/// just clone the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RecommendationCache>,
}

impl AppState {
    /// Builds state from loaded artifacts
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix, cache_capacity: usize) -> Self {
        let recommender = Recommender::new(Arc::new(catalog), Arc::new(matrix));
        Self {
            cache: RecommendationCache::new(recommender, cache_capacity),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.cache.recommender().catalog()
    }
}
