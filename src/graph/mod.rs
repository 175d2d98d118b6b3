//! Signed graph model
//!
//! This module implements the in-memory graph the census runs over:
//! - Undirected simple graph with a real-valued weight per edge
//! - Weight sign (positive, negative, exactly zero) is the only
//!   semantically meaningful edge attribute
//! - Built once from a collaborator source (edge list or dense
//!   symmetric matrix), read-only afterwards

pub mod matrix;
pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, SignedGraph};
pub use types::{NodeId, Sign};
