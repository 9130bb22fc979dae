use serde::{Deserialize, Serialize};

/// A single recommended title with its similarity score
///
/// The score is a percentage in `[0, 100]` with one decimal of precision,
/// derived from the raw cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Name of the recommended movie
    pub title: String,
    /// Similarity to the query movie, as a percentage
    pub similarity_score: f32,
}

/// Lifetime cache statistics
///
/// `hits` and `misses` accumulate for the life of the process;
/// `size` is the current number of cached entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}
