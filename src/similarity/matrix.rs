//! Sentence similarity matrix
//!
//! Square, row-major, symmetric by construction: only the upper triangle is
//! computed and each value is mirrored. The diagonal is always zero.

use super::vector::similarity;
use crate::errors::{Result, SummarizeError};
use crate::types::Sentence;
use rayon::prelude::*;

/// Symmetric pairwise similarity matrix with a zero diagonal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix of the given size
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Compute the matrix for a sentence list
    ///
    /// Rows of the upper triangle are computed on the rayon pool once the
    /// sentence count reaches `parallel_threshold`; each entry is independent,
    /// so the result is identical to the sequential path.
    pub fn from_sentences(sentences: &[Sentence], parallel_threshold: usize) -> Self {
        let n = sentences.len();
        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| similarity(&sentences[i], &sentences[j]))
                .collect()
        };

        let rows: Vec<Vec<f64>> = if n >= parallel_threshold.max(2) {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut matrix = Self::zeros(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                matrix.set_pair(i, i + 1 + offset, value);
            }
        }
        matrix
    }

    /// Build a matrix from explicit rows, validating its shape and values
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(SummarizeError::computation(format!(
                "similarity matrix is not square: row {i} has {} entries, expected {size}",
                row.len()
            )));
        }

        let matrix = Self {
            size,
            values: rows.into_iter().flatten().collect(),
        };
        matrix.validate()?;
        Ok(matrix)
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of the weights in row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Number of sentence pairs with non-zero similarity (graph edges)
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&v| v > 0.0).count())
            .sum()
    }

    /// Whether every weight is zero (no sentence resembles any other)
    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Exact symmetry check
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Check the matrix invariants: finite entries in `[0, 1]`, zero
    /// diagonal, exact symmetry
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.get(i, j);
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(SummarizeError::computation(format!(
                        "similarity ({i}, {j}) = {value} is outside [0, 1]"
                    )));
                }
            }
            if self.get(i, i) != 0.0 {
                return Err(SummarizeError::computation(format!(
                    "similarity diagonal ({i}, {i}) must be 0"
                )));
            }
        }

        if !self.is_symmetric() {
            return Err(SummarizeError::computation(
                "similarity matrix is not symmetric",
            ));
        }

        Ok(())
    }
}
