//! Loading of the offline pipeline's artifacts
//!
//! The offline pipeline exports two JSON files: an ordered array of movie
//! titles and an NxN similarity matrix in the same ordering. Both are read
//! once at startup; any failure here is fatal and the server must not
//! come up.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::services::{Catalog, SimilarityMatrix};

/// Loads the title list artifact into a catalog
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read movie list from {}", path.display()))?;
    let titles = parse_titles(&raw)
        .with_context(|| format!("failed to parse movie list from {}", path.display()))?;
    Ok(Catalog::new(titles))
}

/// Loads the similarity matrix artifact
pub fn load_similarity_matrix(path: impl AsRef<Path>) -> anyhow::Result<SimilarityMatrix> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read similarity matrix from {}", path.display()))?;
    parse_matrix(&raw)
        .with_context(|| format!("failed to parse similarity matrix from {}", path.display()))
}

fn parse_titles(raw: &str) -> anyhow::Result<Vec<String>> {
    let titles: Vec<String> = serde_json::from_str(raw)?;
    anyhow::ensure!(!titles.is_empty(), "movie list is empty");
    Ok(titles)
}

fn parse_matrix(raw: &str) -> anyhow::Result<SimilarityMatrix> {
    let rows: Vec<Vec<f32>> = serde_json::from_str(raw)?;
    SimilarityMatrix::new(rows)
}

/// Checks that the matrix covers exactly the catalog, in both axes
///
/// A mismatch means the artifacts came from different pipeline runs and
/// every index-based lookup would be garbage; refuse to start.
pub fn check_dimensions(catalog: &Catalog, matrix: &SimilarityMatrix) -> anyhow::Result<()> {
    anyhow::ensure!(
        catalog.len() == matrix.len(),
        "artifact dimension mismatch: {} titles but a {}x{} similarity matrix",
        catalog.len(),
        matrix.len(),
        matrix.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titles() {
        let titles = parse_titles(r#"["Avatar", "Inception"]"#).unwrap();
        assert_eq!(titles, vec!["Avatar".to_string(), "Inception".to_string()]);
    }

    #[test]
    fn test_parse_titles_rejects_empty_list() {
        assert!(parse_titles("[]").is_err());
    }

    #[test]
    fn test_parse_titles_rejects_malformed_json() {
        assert!(parse_titles("not json").is_err());
        assert!(parse_titles(r#"{"title": "Avatar"}"#).is_err());
    }

    #[test]
    fn test_parse_matrix() {
        let matrix = parse_matrix("[[1.0, 0.5], [0.5, 1.0]]").unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.row(0), &[1.0, 0.5]);
    }

    #[test]
    fn test_parse_matrix_rejects_ragged_rows() {
        assert!(parse_matrix("[[1.0, 0.5], [0.5]]").is_err());
    }

    #[test]
    fn test_check_dimensions_mismatch() {
        let catalog = Catalog::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
        let matrix = parse_matrix("[[1.0, 0.5], [0.5, 1.0]]").unwrap();
        assert!(check_dimensions(&catalog, &matrix).is_err());

        let square = parse_matrix("[[1.0, 0.5, 0.2], [0.5, 1.0, 0.8], [0.2, 0.8, 1.0]]").unwrap();
        assert!(check_dimensions(&catalog, &square).is_ok());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        assert!(load_catalog("/no/such/movie_list.json").is_err());
    }
}
