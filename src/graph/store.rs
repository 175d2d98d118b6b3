//! In-memory signed graph storage
//!
//! An undirected simple graph with a real-valued weight on every edge.
//! Built once from a collaborator source (weighted edge list or dense
//! symmetric matrix, see `matrix.rs`) and read-only afterwards; the
//! census never mutates it.

use super::types::{NodeId, Sign};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised at graph-construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    #[error("duplicate edge between {0} and {1} (multigraph input)")]
    DuplicateEdge(NodeId, NodeId),

    #[error("asymmetric weights between {u} and {v}: {forward} vs {backward}")]
    AsymmetricWeight {
        u: NodeId,
        v: NodeId,
        forward: f64,
        backward: f64,
    },

    #[error("weight {weight} on edge between {u} and {v} is not finite")]
    NonFiniteWeight { u: NodeId, v: NodeId, weight: f64 },

    #[error("adjacency matrix is {rows}x{cols}, expected square")]
    NonSquareMatrix { rows: usize, cols: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An undirected edge-weighted simple graph.
///
/// Adjacency is stored as node -> {neighbor -> weight} with both
/// directions mirrored, so `weight(u, v) == weight(v, u)` holds by
/// construction. Iteration order is insertion order (deterministic).
#[derive(Debug, Clone, Default)]
pub struct SignedGraph {
    adjacency: IndexMap<NodeId, IndexMap<NodeId, f64>>,
    edge_count: usize,
}

impl SignedGraph {
    /// Build a graph from a weighted edge list.
    ///
    /// Each item is one undirected edge {u, v} with its weight; listing
    /// the same unordered pair twice is rejected as multigraph input. A
    /// weight of exactly 0.0 is a real edge with no sign.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut graph = SignedGraph::default();
        for (u, v, weight) in edges {
            graph.insert_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Neighbors of a node; empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|row| row.keys().copied())
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, IndexMap::len)
    }

    /// Weight of the edge {u, v}, if present
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(&u).and_then(|row| row.get(&v)).copied()
    }

    /// Sign of the edge {u, v}, if present
    pub fn sign(&self, u: NodeId, v: NodeId) -> Option<Sign> {
        self.weight(u, v).map(Sign::of)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.weight(u, v).is_some()
    }

    /// All undirected edges, each yielded exactly once as (u, v, weight)
    /// with u < v by node id
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&u, row)| {
            row.iter()
                .filter(move |(&v, _)| u < v)
                .map(move |(&v, &w)| (u, v, w))
        })
    }

    pub(crate) fn ensure_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    pub(crate) fn insert_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { u, v, weight });
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        self.edge_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_from_edges() {
        let graph = SignedGraph::from_edges([
            (n(0), n(1), 1.0),
            (n(1), n(2), -2.5),
            (n(2), n(0), 0.0),
        ])
        .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(n(0), n(1)), Some(1.0));
        assert_eq!(graph.weight(n(1), n(0)), Some(1.0));
        assert_eq!(graph.sign(n(1), n(2)), Some(Sign::Negative));
        assert_eq!(graph.sign(n(2), n(0)), Some(Sign::Zero));
        assert!(!graph.has_edge(n(0), n(3)));
        assert_eq!(graph.degree(n(1)), 2);
    }

    #[test]
    fn test_zero_weight_is_an_edge() {
        let graph = SignedGraph::from_edges([(n(0), n(1), 0.0)]).unwrap();
        assert!(graph.has_edge(n(0), n(1)));
        assert_eq!(graph.sign(n(0), n(1)), Some(Sign::Zero));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = SignedGraph::from_edges([(n(3), n(3), 1.0)]);
        assert_eq!(result.unwrap_err(), GraphError::SelfLoop(n(3)));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        // Same unordered pair, either orientation
        let result = SignedGraph::from_edges([(n(0), n(1), 1.0), (n(1), n(0), 1.0)]);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateEdge(n(1), n(0)));

        let result = SignedGraph::from_edges([(n(0), n(1), 1.0), (n(0), n(1), -1.0)]);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateEdge(n(0), n(1)));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let result = SignedGraph::from_edges([(n(0), n(1), f64::NAN)]);
        assert!(matches!(
            result.unwrap_err(),
            GraphError::NonFiniteWeight { .. }
        ));

        let result = SignedGraph::from_edges([(n(0), n(1), f64::INFINITY)]);
        assert!(matches!(
            result.unwrap_err(),
            GraphError::NonFiniteWeight { .. }
        ));
    }

    #[test]
    fn test_edges_yielded_once() {
        let graph = SignedGraph::from_edges([
            (n(2), n(0), 0.4),
            (n(0), n(3), 1.0),
            (n(1), n(2), 1.0),
            (n(2), n(3), 1.0),
        ])
        .unwrap();

        let mut edges: Vec<_> = graph.edges().collect();
        edges.sort_by_key(|&(u, v, _)| (u, v));
        assert_eq!(
            edges,
            vec![
                (n(0), n(2), 0.4),
                (n(0), n(3), 1.0),
                (n(1), n(2), 1.0),
                (n(2), n(3), 1.0),
            ]
        );
    }
}
