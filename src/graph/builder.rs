//! Sentence graph builder
//!
//! One node per sentence, one undirected weighted edge per sentence pair
//! with non-zero similarity. Uses FxHashMap adjacency for O(1) edge updates
//! during construction.

use crate::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// Index of the sentence this node stands for
    pub sentence_idx: usize,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node without edges
    pub fn new(sentence_idx: usize) -> Self {
        Self {
            sentence_idx,
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with `count` isolated nodes, one per sentence
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: (0..count).map(BuilderNode::new).collect(),
        }
    }

    /// Append a node for the next sentence, returning its ID
    pub fn add_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::new(id as usize));
        id
    }

    /// Increment the edge weight between two nodes
    ///
    /// Edges are undirected; self-loops and non-positive weights are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build the sentence graph from a similarity matrix
    ///
    /// Every sentence gets a node, even when it has no edges.
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let n = matrix.size();
        let mut builder = Self::with_nodes(n);
        for i in 0..n {
            for j in (i + 1)..n {
                builder.increment_edge(i as u32, j as u32, matrix.get(i, j));
            }
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_nodes() {
        let mut builder = GraphBuilder::new();
        assert_eq!(builder.add_node(), 0);
        assert_eq!(builder.add_node(), 1);
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.get_node(1).unwrap().sentence_idx, 1);
    }

    #[test]
    fn test_edge_incrementing() {
        let mut builder = GraphBuilder::with_nodes(2);
        builder.increment_edge(0, 1, 0.25);
        builder.increment_edge(0, 1, 0.25);

        assert_eq!(builder.get_node(0).unwrap().edges.get(&1), Some(&0.5));
        assert_eq!(builder.get_node(1).unwrap().edges.get(&0), Some(&0.5));
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_and_zero_weights_ignored() {
        let mut builder = GraphBuilder::with_nodes(2);
        builder.increment_edge(0, 0, 1.0);
        builder.increment_edge(0, 1, 0.0);

        assert!(builder.get_node(0).unwrap().edges.is_empty());
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_from_matrix_keeps_isolated_nodes() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let builder = GraphBuilder::from_matrix(&matrix);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
        assert!(builder.get_node(2).unwrap().edges.is_empty());
    }
}
