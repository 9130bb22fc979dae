/// Precomputed pairwise similarity scores, read-only after startup
///
/// Row-major flat storage of an NxN matrix of cosine similarities in
/// `[0, 1]`. The matrix is symmetric with a unit diagonal by construction
/// (the offline pipeline's concern); this wrapper only guarantees shape.
pub struct SimilarityMatrix {
    scores: Vec<f32>,
    n: usize,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows, validating squareness
    pub fn new(rows: Vec<Vec<f32>>) -> anyhow::Result<Self> {
        let n = rows.len();
        let mut scores = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                anyhow::bail!(
                    "similarity matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n
                );
            }
            scores.extend(row);
        }
        Ok(Self { scores, n })
    }

    /// Similarity scores of every title against the title at `index`
    pub fn row(&self, index: usize) -> &[f32] {
        &self.scores[index * self.n..(index + 1) * self.n]
    }

    /// Number of titles covered by the matrix (one axis)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
