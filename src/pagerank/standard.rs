//! Standard PageRank algorithm
//!
//! Weighted power iteration over the sentence graph with proper handling of
//! dangling nodes.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a StandardPageRank with the ranking settings of a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// `score(i) = (1-d)/N + d * Σ_j [w(j,i) / Σ_k w(j,k)] * score(j)`.
    /// A node with no outgoing weight sends nothing along edges; its mass is
    /// spread uniformly instead, so an edgeless graph converges to 1/N.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            // L1 norm
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Scores already sum to ~1; renormalize against rounding drift.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
