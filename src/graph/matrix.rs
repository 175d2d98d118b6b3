//! Dense-matrix collaborator source
//!
//! Builds a [`SignedGraph`] from a symmetric real-valued adjacency
//! matrix: entry (i, j) is the weight of the edge between nodes i and j,
//! and a zero entry means no edge. Zero-weight edges therefore cannot be
//! expressed here; use [`SignedGraph::from_edges`] for those.

use super::store::{GraphError, GraphResult, SignedGraph};
use super::types::NodeId;
use ndarray::Array2;

impl SignedGraph {
    /// Build a graph from a dense symmetric weight matrix.
    ///
    /// Row/column index is the node id, so every index becomes a node
    /// even when its row is all zeros. Fails on non-square input, a
    /// nonzero diagonal entry (self-loop), an entry that differs from
    /// its transpose, or a non-finite entry.
    pub fn from_matrix(matrix: &Array2<f64>) -> GraphResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(GraphError::NonSquareMatrix { rows, cols });
        }

        let mut graph = SignedGraph::default();
        for i in 0..rows {
            graph.ensure_node(NodeId::new(i as u64));
        }

        for i in 0..rows {
            let diagonal = matrix[[i, i]];
            if diagonal != 0.0 {
                return Err(GraphError::SelfLoop(NodeId::new(i as u64)));
            }

            for j in (i + 1)..cols {
                let u = NodeId::new(i as u64);
                let v = NodeId::new(j as u64);
                let forward = matrix[[i, j]];
                let backward = matrix[[j, i]];

                if !forward.is_finite() {
                    return Err(GraphError::NonFiniteWeight {
                        u,
                        v,
                        weight: forward,
                    });
                }
                if !backward.is_finite() {
                    return Err(GraphError::NonFiniteWeight {
                        u: v,
                        v: u,
                        weight: backward,
                    });
                }
                if forward != backward {
                    return Err(GraphError::AsymmetricWeight {
                        u,
                        v,
                        forward,
                        backward,
                    });
                }

                if forward != 0.0 {
                    graph.insert_edge(u, v, forward)?;
                }
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_sample_matrix() {
        // The four-node sample: edges (0,2)=0.4, (0,3)=1, (1,2)=1, (2,3)=1
        let adj = array![
            [0.0, 0.0, 0.4, 1.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.4, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ];
        let graph = SignedGraph::from_matrix(&adj).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.weight(n(0), n(2)), Some(0.4));
        assert_eq!(graph.weight(n(1), n(3)), None);
    }

    #[test]
    fn test_zero_entry_is_no_edge() {
        let adj = array![[0.0, 0.0], [0.0, 0.0]];
        let graph = SignedGraph::from_matrix(&adj).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(n(0), n(1)));
    }

    #[test]
    fn test_non_square_rejected() {
        let adj = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            SignedGraph::from_matrix(&adj).unwrap_err(),
            GraphError::NonSquareMatrix { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_diagonal_self_loop_rejected() {
        let adj = array![[0.0, 1.0], [1.0, 2.0]];
        assert_eq!(
            SignedGraph::from_matrix(&adj).unwrap_err(),
            GraphError::SelfLoop(n(1))
        );
    }

    #[test]
    fn test_asymmetric_matrix_rejected() {
        let adj = array![[0.0, 1.0], [-1.0, 0.0]];
        assert_eq!(
            SignedGraph::from_matrix(&adj).unwrap_err(),
            GraphError::AsymmetricWeight {
                u: n(0),
                v: n(1),
                forward: 1.0,
                backward: -1.0,
            }
        );
    }

    #[test]
    fn test_nan_entry_rejected() {
        let adj = array![[0.0, f64::NAN], [f64::NAN, 0.0]];
        assert!(matches!(
            SignedGraph::from_matrix(&adj).unwrap_err(),
            GraphError::NonFiniteWeight { .. }
        ));
    }
}
