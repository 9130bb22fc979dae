use std::sync::Arc;

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::catalog::{normalize_title, Catalog};
use crate::services::similarity::SimilarityMatrix;

/// Default number of recommendations per query
pub const DEFAULT_K: usize = 5;

/// Ranks similarity-matrix neighbors for a query title
///
/// Holds shared read-only handles to the catalog and matrix; safe to call
/// from any number of concurrent requests without locking.
pub struct Recommender {
    catalog: Arc<Catalog>,
    matrix: Arc<SimilarityMatrix>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, matrix: Arc<SimilarityMatrix>) -> Self {
        Self { catalog, matrix }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the top `k` most similar titles to `title`, best first
    ///
    /// Fails with `InvalidInput` when `k` is zero or the title is blank,
    /// and `NotFound` when the title is not in the catalog. `k` larger
    /// than the catalog (minus the query itself) is clamped, not rejected.
    ///
    /// Equal scores are ordered by ascending catalog index so repeated
    /// calls always rank identically. The full row is sorted rather than
    /// heap-selected; at the catalog sizes involved (a few thousand
    /// titles) the simpler approach wins.
    pub fn recommend(&self, title: &str, k: usize) -> AppResult<Vec<Recommendation>> {
        if k == 0 {
            return Err(AppError::InvalidInput(
                "num_recommendations must be a positive integer".to_string(),
            ));
        }
        if normalize_title(title).is_empty() {
            return Err(AppError::InvalidInput(
                "movie_name must not be blank".to_string(),
            ));
        }

        let movie_index = self
            .catalog
            .index_of(title)
            .ok_or_else(|| AppError::NotFound(format!("Movie '{}' not found", title)))?;

        let row = self.matrix.row(movie_index);

        // Rank every other title by descending score, index ascending on ties.
        let mut scored: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| i != movie_index)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let k = k.min(scored.len());
        debug!(title, k, "ranked similarity row");

        Ok(scored[..k]
            .iter()
            .map(|&(i, score)| Recommendation {
                title: self.catalog.title_at(i).to_string(),
                similarity_score: to_percentage(score),
            })
            .collect())
    }
}

/// Converts a raw similarity in `[0, 1]` to a percentage with one decimal
///
/// Rounds half-up (f32 `round` is half-away-from-zero, which is half-up
/// for the non-negative scores handled here).
fn to_percentage(score: f32) -> f32 {
    (score * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_recommender() -> Recommender {
        let catalog = Arc::new(Catalog::new(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]));
        let matrix = Arc::new(
            SimilarityMatrix::new(vec![
                vec![1.0, 0.4, 0.9],
                vec![0.4, 1.0, 0.6],
                vec![0.9, 0.6, 1.0],
            ])
            .unwrap(),
        );
        Recommender::new(catalog, matrix)
    }

    #[test]
    fn test_toy_catalog_hand_computed_ranking() {
        let recs = toy_recommender().recommend("A", 2).unwrap();
        assert_eq!(
            recs,
            vec![
                Recommendation {
                    title: "C".to_string(),
                    similarity_score: 90.0,
                },
                Recommendation {
                    title: "B".to_string(),
                    similarity_score: 40.0,
                },
            ]
        );
    }

    #[test]
    fn test_excludes_query_title() {
        let recs = toy_recommender().recommend("B", 5).unwrap();
        assert!(recs.iter().all(|r| r.title != "B"));
    }

    #[test]
    fn test_k_clamped_to_catalog_size() {
        let recs = toy_recommender().recommend("A", 100).unwrap();
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_equal_scores_break_ties_by_catalog_index() {
        let catalog = Arc::new(Catalog::new(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ]));
        let matrix = Arc::new(
            SimilarityMatrix::new(vec![
                vec![1.0, 0.5, 0.5, 0.5],
                vec![0.5, 1.0, 0.5, 0.5],
                vec![0.5, 0.5, 1.0, 0.5],
                vec![0.5, 0.5, 0.5, 1.0],
            ])
            .unwrap(),
        );
        let recs = Recommender::new(catalog, matrix).recommend("A", 3).unwrap();
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let err = toy_recommender().recommend("NoSuchMovie123", 5).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_zero_k_rejected() {
        let err = toy_recommender().recommend("A", 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = toy_recommender().recommend("   ", 5).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_scores_are_percentages_in_range() {
        let recs = toy_recommender().recommend("C", 2).unwrap();
        for rec in recs {
            assert!((0.0..=100.0).contains(&rec.similarity_score));
        }
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(to_percentage(0.876), 87.6);
        assert_eq!(to_percentage(0.5), 50.0);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
    }
}
