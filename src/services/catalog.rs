use std::collections::HashMap;

/// Normalizes a title for lookup and cache keying
///
/// Lowercases, trims, and collapses internal whitespace. Catalog lookups
/// and cache keys must go through this same function so cached and
/// uncached paths agree on which titles match.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable title-to-index mapping built once at startup
///
/// Index assignment follows the order of the title list artifact, so it
/// matches the row/column ordering of the similarity matrix. If two titles
/// collide after normalization, the first occurrence wins.
pub struct Catalog {
    titles: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from an ordered title list
    pub fn new(titles: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(titles.len());
        for (i, title) in titles.iter().enumerate() {
            index.entry(normalize_title(title)).or_insert(i);
        }
        Self { titles, index }
    }

    /// Resolves a title to its catalog index under the normalization policy
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.index.get(&normalize_title(title)).copied()
    }

    /// Returns the original (un-normalized) title at the given index
    ///
    /// Panics if `index` is out of bounds; callers only pass indices that
    /// came from `index_of` or from a dimension-checked matrix row.
    pub fn title_at(&self, index: usize) -> &str {
        &self.titles[index]
    }

    /// All titles in catalog (index) order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            "Avatar".to_string(),
            "The Dark Knight".to_string(),
            "Inception".to_string(),
        ])
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  The  Dark   Knight "), "the dark knight");
        assert_eq!(normalize_title("AVATAR"), "avatar");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn test_index_of_is_case_and_whitespace_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.index_of("Avatar"), Some(0));
        assert_eq!(catalog.index_of("  the dark  KNIGHT "), Some(1));
        assert_eq!(catalog.index_of("inception"), Some(2));
        assert_eq!(catalog.index_of("NoSuchMovie123"), None);
    }

    #[test]
    fn test_title_at_roundtrip() {
        let catalog = sample_catalog();
        for i in 0..catalog.len() {
            let title = catalog.title_at(i).to_string();
            assert_eq!(catalog.index_of(&title), Some(i));
        }
    }

    #[test]
    fn test_duplicate_titles_first_occurrence_wins() {
        let catalog = Catalog::new(vec![
            "Avatar".to_string(),
            "avatar".to_string(),
            "AVATAR".to_string(),
        ]);
        assert_eq!(catalog.index_of("Avatar"), Some(0));
        assert_eq!(catalog.len(), 3);
    }
}
