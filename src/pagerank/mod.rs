//! PageRank over the sentence graph
//!
//! [`rank`] is the entry point used by the pipeline: it validates the
//! similarity matrix, builds the graph, runs [`standard::StandardPageRank`]
//! and reports non-convergence as a warning rather than an error.

pub mod standard;

use crate::errors::{Result, SummarizeError};
use crate::graph::{builder::GraphBuilder, csr::CsrGraph};
use crate::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;
use standard::StandardPageRank;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node indices ordered by score descending, ties by index ascending
    pub fn ranked(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]).then(a.cmp(&b)));
        order
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

/// Rank the sentences behind a similarity matrix
///
/// Zero sentences give an empty score vector and a single sentence scores
/// 1.0 without iterating. A malformed matrix or non-finite scores are
/// reported as [`SummarizeError::Computation`].
pub fn rank(matrix: &SimilarityMatrix, config: &SummarizerConfig) -> Result<PageRankResult> {
    match matrix.size() {
        0 => return Ok(PageRankResult::new(Vec::new(), 0, 0.0, true)),
        1 => return Ok(PageRankResult::new(vec![1.0], 0, 0.0, true)),
        _ => {}
    }

    matrix.validate()?;

    let graph = CsrGraph::from_builder(&GraphBuilder::from_matrix(matrix));
    let result = StandardPageRank::from_config(config).run(&graph);

    if result.scores.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return Err(SummarizeError::computation(
            "pagerank produced a non-finite score",
        ));
    }

    if !result.converged {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            iterations = result.iterations,
            delta = result.delta,
            threshold = config.convergence_threshold,
            "pagerank did not converge; using best estimate"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_rank_empty() {
        let result = rank(&SimilarityMatrix::zeros(0), &SummarizerConfig::default()).unwrap();
        assert!(result.scores.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn test_rank_single_sentence() {
        let result = rank(&SimilarityMatrix::zeros(1), &SummarizerConfig::default()).unwrap();
        assert_eq!(result.scores, vec![1.0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_rank_all_zero_is_uniform() {
        let result = rank(&SimilarityMatrix::zeros(5), &SummarizerConfig::default()).unwrap();
        for score in &result.scores {
            assert!((score - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rank_scores_sum_to_one() {
        let m = matrix(vec![
            vec![0.0, 0.8, 0.1],
            vec![0.8, 0.0, 0.3],
            vec![0.1, 0.3, 0.0],
        ]);
        let result = rank(&m, &SummarizerConfig::default()).unwrap();
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(result.ranked()[0], 1);
    }

    #[test]
    fn test_rank_not_converged_is_not_error() {
        let m = matrix(vec![
            vec![0.0, 0.8, 0.1],
            vec![0.8, 0.0, 0.0],
            vec![0.1, 0.0, 0.0],
        ]);
        let config = SummarizerConfig::new()
            .with_max_iterations(1)
            .with_convergence_threshold(1e-300);
        let result = rank(&m, &config).unwrap();
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 3);
    }

    #[test]
    fn test_ranked_breaks_ties_by_index() {
        let result = PageRankResult::new(vec![0.25, 0.5, 0.25], 1, 0.0, true);
        assert_eq!(result.ranked(), vec![1, 0, 2]);
        assert_eq!(result.top_n(2), vec![(1, 0.5), (0, 0.25)]);
        assert_eq!(result.score(7), 0.0);
    }
}
