//! Exact inner-product vector index over unit vectors.
//!
//! A brute-force flat index: every vector is L2-normalized on insertion,
//! and search is an exhaustive dot-product scan. Since both sides are
//! unit-normalized, inner product equals cosine similarity, so ranking is
//! exact — no approximate-search drift — and bit-reproducible. At the
//! scale of a few thousand missions this beats any ANN structure on
//! simplicity and correctness.
//!
//! Entry ids are positional: the i-th vector added has id `i`, strictly
//! increasing, no gaps, never reused. The index supports no removal; it
//! is rebuilt from the mission store at startup.

use crate::error::{Error, Result};

/// Flat inner-product index. Dimension is fixed at construction; vectors
/// of any other length are rejected with [`Error::DimensionMismatch`].
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Drop all entries. Used when rebuilding from the mission store.
    pub fn clear(&mut self) {
        self.vectors.clear();
    }

    /// Append a unit-normalized copy of `vector` as the next entry.
    ///
    /// The only failure mode is a dimension mismatch; a well-formed
    /// vector always inserts.
    pub fn add(&mut self, vector: &[f32]) -> Result<()> {
        self.check_dimensions(vector)?;
        self.vectors.push(l2_normalize(vector));
        Ok(())
    }

    /// Top-k nearest neighbors of `query` by cosine similarity.
    ///
    /// Returns up to `min(k, len)` pairs of `(id, score)` ordered by
    /// descending score, ties broken by ascending id so ranking is
    /// deterministic. An empty index yields an empty result, not an
    /// error.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        self.check_dimensions(query)?;
        let query = l2_normalize(query);

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, v)| (id, dot(&query, v)))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);
        Ok(scored)
    }

    fn check_dimensions(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// L2-normalize a vector. A zero vector is returned unchanged, so it
/// scores 0.0 against every other vector rather than producing NaNs —
/// the deterministic policy for degenerate (e.g. empty-text) embeddings.
pub fn l2_normalize(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        v.iter().map(|x| x / norm).collect()
    } else {
        v.to_vec()
    }
}
