//! Tricensus — signed triangle census for weighted graphs
//!
//! Computes, for an undirected edge-weighted graph, how many triangles
//! fall into each edge-sign pattern: all positive, one negative, two
//! negative, all negative, plus the total triangle count. Sign
//! composition is the structural-balance criterion for signed networks:
//! triangles whose sign product is positive are balanced, the rest are
//! not. Triangles touching a zero-weight edge count toward the total
//! only.
//!
//! # Architecture
//!
//! - [`graph`] — the in-memory model: an undirected simple graph with a
//!   real weight per edge, built once from an edge list or a dense
//!   symmetric matrix and read-only afterwards.
//! - [`algo`] — integration layer over the `tricensus-algorithms` crate,
//!   which runs the census on a dense read-only view of the graph.
//!
//! # Example Usage
//!
//! ```rust
//! use tricensus::graph::{NodeId, SignedGraph};
//! use tricensus::algo::triangle_census;
//!
//! let n = NodeId::new;
//! let graph = SignedGraph::from_edges([
//!     (n(0), n(1), 1.0),
//!     (n(0), n(2), 1.0),
//!     (n(1), n(2), -1.0),
//! ]).unwrap();
//!
//! let census = triangle_census(&graph).unwrap();
//! assert_eq!(census.one_negative, 1);
//! assert_eq!(census.total, 1);
//! assert_eq!(census.unbalanced(), 1);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{build_view, par_triangle_census, triangle_census, CensusError, TriangleCensus};
pub use graph::{GraphError, GraphResult, NodeId, Sign, SignedGraph};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version string
pub fn version() -> &'static str {
    VERSION
}
