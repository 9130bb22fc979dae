use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::AppResult;
use crate::models::{CacheStats, Recommendation};
use crate::services::catalog::normalize_title;
use crate::services::recommender::Recommender;

/// Memoized front of the recommendation engine
///
/// A fixed-capacity LRU map keyed by normalized `(title, k)`, so repeated
/// queries skip the ranking work. Only successful results are cached:
/// the catalog never changes at runtime, so a `NotFound` repeat costs one
/// hash probe and failures never take eviction slots from real entries.
///
/// The LRU map needs exclusive access on every call (even reads reorder
/// recency), hence the mutex; hit/miss counters are atomics so `stats`
/// never contends with lookups.
pub struct RecommendationCache {
    recommender: Recommender,
    entries: Mutex<LruCache<(String, usize), Vec<Recommendation>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecommendationCache {
    /// Wraps `recommender` with a cache holding up to `capacity` results
    pub fn new(recommender: Recommender, capacity: usize) -> Arc<Self> {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Arc::new(Self {
            recommender,
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Returns recommendations for `title`, memoizing successful results
    ///
    /// A cached entry counts as a hit and is promoted to most recently
    /// used; anything else counts as a miss and delegates to the engine.
    /// Invalid arguments are rejected before the cache is touched and
    /// affect neither counter.
    pub async fn get(&self, title: &str, k: usize) -> AppResult<Vec<Recommendation>> {
        let key = (normalize_title(title), k);
        if k == 0 || key.0.is_empty() {
            // Let the engine produce the InvalidInput error.
            return self.recommender.recommend(title, k);
        }

        {
            let mut entries = self.entries.lock().await;
            if let Some(cached) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(title = %key.0, k, "cache hit");
                return Ok(cached.clone());
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(title = %key.0, k, "cache miss");

        let result = self.recommender.recommend(title, k)?;
        self.entries.lock().await.put(key, result.clone());
        Ok(result)
    }

    /// Lifetime hit/miss counters plus current occupancy
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.lock().await.len(),
        }
    }

    /// Discards every cached entry
    ///
    /// Hit/miss counters are lifetime statistics and survive a clear.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
