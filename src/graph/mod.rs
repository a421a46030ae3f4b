//! Graph construction and representation
//!
//! This module turns a similarity matrix into the weighted, undirected
//! sentence graph ranked by PageRank.

pub mod builder;
pub mod csr;
