//! Sentence similarity
//!
//! Bag-of-words cosine similarity over a per-pair vocabulary, and the
//! symmetric similarity matrix that feeds the sentence graph.

pub mod matrix;
pub mod vector;

pub use matrix::SimilarityMatrix;
pub use vector::{similarity, FrequencyVector, Vocabulary};
