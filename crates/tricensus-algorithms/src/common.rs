//! Shared utilities for the census algorithms
//!
//! Provides a read-only, dense-indexed view of an undirected signed graph
//! for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected weighted graph using
/// Compressed Sparse Row (CSR) format.
///
/// Every undirected edge {u, v} appears in both rows: v in u's row and
/// u in v's row, carrying the same weight in each direction.
pub struct SignedGraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor node indices
    pub targets: Vec<usize>,
    /// Edge weights: aligned with `targets`
    pub weights: Vec<f64>,
}

impl SignedGraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get neighbors of a node (by index)
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Get weights for a node's incident edges, aligned with `neighbors`
    pub fn edge_weights(&self, idx: usize) -> &[f64] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Weight of the edge between two node indices, if present.
    ///
    /// Linear scan over the smaller-degree endpoint's row.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        let (a, b) = if self.degree(u) <= self.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.neighbors(a)
            .iter()
            .position(|&t| t == b)
            .map(|pos| self.edge_weights(a)[pos])
    }

    /// Total number of undirected edges (each stored twice in CSR)
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Helper to create a view from per-node adjacency rows (construction/test support)
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        adjacency: Vec<Vec<(usize, f64)>>,
    ) -> Self {
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for row in adjacency {
            for (target, weight) in row {
                targets.push(target);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }

        SignedGraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_path() -> SignedGraphView {
        // 0 - 1 - 2, weights 1.0 and -2.0
        let node_to_index = (0..3u64).map(|n| (n, n as usize)).collect();
        SignedGraphView::from_adjacency_list(
            3,
            vec![0, 1, 2],
            node_to_index,
            vec![
                vec![(1, 1.0)],
                vec![(0, 1.0), (2, -2.0)],
                vec![(1, -2.0)],
            ],
        )
    }

    #[test]
    fn test_degrees_and_neighbors() {
        let view = two_path();
        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(1), 2);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.edge_weights(1), &[1.0, -2.0]);
        assert_eq!(view.edge_count(), 2);
    }

    #[test]
    fn test_weight_lookup() {
        let view = two_path();
        assert_eq!(view.weight(0, 1), Some(1.0));
        assert_eq!(view.weight(2, 1), Some(-2.0));
        assert_eq!(view.weight(0, 2), None);
    }
}
