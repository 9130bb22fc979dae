pub mod cache;
pub mod catalog;
pub mod recommender;
pub mod similarity;

pub use cache::RecommendationCache;
pub use catalog::Catalog;
pub use recommender::Recommender;
pub use similarity::SimilarityMatrix;
