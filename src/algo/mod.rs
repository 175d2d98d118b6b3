//! Census integration layer
//!
//! The census engine lives in the `tricensus-algorithms` crate and works
//! on a dense, integer-indexed view. This module builds that view from a
//! [`SignedGraph`] and wraps the engine entry points.

use crate::graph::SignedGraph;
use std::collections::HashMap;
use tracing::debug;

// Re-export the engine surface
pub use tricensus_algorithms::{CensusError, SignedGraphView, TriangleCensus};

/// Build a dense view of the graph for algorithm execution
pub fn build_view(graph: &SignedGraph) -> SignedGraphView {
    let node_count = graph.node_count();

    let mut index_to_node = Vec::with_capacity(node_count);
    let mut node_to_index = HashMap::with_capacity(node_count);
    for (idx, node) in graph.nodes().enumerate() {
        index_to_node.push(node.as_u64());
        node_to_index.insert(node.as_u64(), idx);
    }

    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
    for (u, v, weight) in graph.edges() {
        let u_idx = node_to_index[&u.as_u64()];
        let v_idx = node_to_index[&v.as_u64()];
        adjacency[u_idx].push((v_idx, weight));
        adjacency[v_idx].push((u_idx, weight));
    }

    SignedGraphView::from_adjacency_list(node_count, index_to_node, node_to_index, adjacency)
}

/// Run the signed triangle census over a graph
pub fn triangle_census(graph: &SignedGraph) -> Result<TriangleCensus, CensusError> {
    let view = build_view(graph);
    debug!(
        "triangle census over {} nodes / {} edges",
        view.node_count,
        view.edge_count()
    );
    tricensus_algorithms::triangle_census(&view)
}

/// Run the signed triangle census with edge partitions on the rayon pool
pub fn par_triangle_census(graph: &SignedGraph) -> Result<TriangleCensus, CensusError> {
    let view = build_view(graph);
    debug!(
        "parallel triangle census over {} nodes / {} edges",
        view.node_count,
        view.edge_count()
    );
    tricensus_algorithms::par_triangle_census(&view)
}
