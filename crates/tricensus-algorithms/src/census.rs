//! Signed triangle census
//!
//! Enumerates every triangle in an undirected weighted graph exactly once
//! and tallies triangles by the sign pattern of their three edge weights.

use super::common::SignedGraphView;
use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during a census run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CensusError {
    /// Every triangle is discovered once per edge, so each raw tally must
    /// be a multiple of 3. A remainder means the adjacency view is not
    /// symmetric and the result cannot be trusted.
    #[error("raw {counter} tally {raw} is not a multiple of 3 (asymmetric adjacency view)")]
    TallyNotDivisible { counter: &'static str, raw: u64 },
}

/// Triangle counts broken down by edge-sign pattern.
///
/// A triangle touching a zero-weight edge falls into none of the four
/// sign buckets but still counts toward `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleCensus {
    /// Triangles with three positive edges
    pub all_positive: u64,
    /// Triangles with exactly one negative edge (sign product negative)
    pub one_negative: u64,
    /// Triangles with exactly two negative edges (sign product positive)
    pub two_negative: u64,
    /// Triangles with three negative edges
    pub all_negative: u64,
    /// All triangles, including those touching a zero-weight edge
    pub total: u64,
}

impl TriangleCensus {
    /// Structurally balanced triangles: positive sign product
    pub fn balanced(&self) -> u64 {
        self.all_positive + self.two_negative
    }

    /// Structurally unbalanced triangles: negative sign product
    pub fn unbalanced(&self) -> u64 {
        self.one_negative + self.all_negative
    }

    /// Triangles that touch at least one zero-weight edge
    pub fn unclassified(&self) -> u64 {
        self.total - self.all_positive - self.one_negative - self.two_negative - self.all_negative
    }
}

/// Per-discovery tallies before the divide-by-3 step
#[derive(Debug, Clone, Copy, Default)]
struct RawTally {
    all_positive: u64,
    one_negative: u64,
    two_negative: u64,
    all_negative: u64,
    discovered: u64,
}

impl RawTally {
    /// Record one triangle discovery given its three edge weights.
    ///
    /// Signs are strict: a weight of exactly 0.0 is neither positive nor
    /// negative, so any zero-weight edge keeps the triangle out of all
    /// four sign buckets. For zero-free triangles the positive/negative
    /// split is equivalent to classifying by the sign of the product.
    fn record(&mut self, a: f64, b: f64, c: f64) {
        self.discovered += 1;

        let weights = [a, b, c];
        let positives = weights.iter().filter(|&&w| w > 0.0).count();
        let negatives = weights.iter().filter(|&&w| w < 0.0).count();

        match (positives, negatives) {
            (3, 0) => self.all_positive += 1,
            (2, 1) => self.one_negative += 1,
            (1, 2) => self.two_negative += 1,
            (0, 3) => self.all_negative += 1,
            _ => {} // zero-weight edge: total only
        }
    }

    fn merge(self, other: Self) -> Self {
        RawTally {
            all_positive: self.all_positive + other.all_positive,
            one_negative: self.one_negative + other.one_negative,
            two_negative: self.two_negative + other.two_negative,
            all_negative: self.all_negative + other.all_negative,
            discovered: self.discovered + other.discovered,
        }
    }

    /// Each triangle is discovered exactly once per edge, i.e. three
    /// times in a symmetric view. Divide every tally by 3, failing if a
    /// remainder shows up.
    fn finalize(self) -> Result<TriangleCensus, CensusError> {
        Ok(TriangleCensus {
            all_positive: exact_third(self.all_positive, "all_positive")?,
            one_negative: exact_third(self.one_negative, "one_negative")?,
            two_negative: exact_third(self.two_negative, "two_negative")?,
            all_negative: exact_third(self.all_negative, "all_negative")?,
            total: exact_third(self.discovered, "total")?,
        })
    }
}

fn exact_third(raw: u64, counter: &'static str) -> Result<u64, CensusError> {
    if raw % 3 != 0 {
        return Err(CensusError::TallyNotDivisible { counter, raw });
    }
    Ok(raw / 3)
}

/// Neighbor -> weight map per node, for O(1) membership tests during the
/// common-neighbor scan
fn adjacency_maps(view: &SignedGraphView) -> Vec<HashMap<usize, f64>> {
    (0..view.node_count)
        .map(|u| {
            view.neighbors(u)
                .iter()
                .copied()
                .zip(view.edge_weights(u).iter().copied())
                .collect()
        })
        .collect()
}

/// Tally all triangles discovered through edges owned by node `u`.
///
/// An undirected edge {u, v} is owned by its smaller endpoint, so each
/// edge is visited a single time. Every common neighbor of the endpoints
/// closes one triangle.
fn scan_node(adjacency: &[HashMap<usize, f64>], u: usize) -> RawTally {
    let mut tally = RawTally::default();
    let u_adj = &adjacency[u];

    for (&v, &w_uv) in u_adj {
        if v <= u {
            continue; // owned by the other endpoint
        }
        let v_adj = &adjacency[v];

        for (&w, &w_uw) in u_adj {
            if w == v {
                continue;
            }
            if let Some(&w_vw) = v_adj.get(&w) {
                tally.record(w_uv, w_uw, w_vw);
            }
        }
    }

    tally
}

/// Signed Triangle Census
///
/// Single synchronous pass: for each undirected edge, intersect the
/// endpoints' neighbor sets; each common neighbor closes a triangle,
/// classified by the signs of its three edge weights. Raw tallies are
/// divided exactly by 3 since every triangle is reachable from each of
/// its three edges.
///
/// Fails with [`CensusError::TallyNotDivisible`] if the view is not
/// symmetric; no partial result is returned.
pub fn triangle_census(view: &SignedGraphView) -> Result<TriangleCensus, CensusError> {
    let adjacency = adjacency_maps(view);

    let mut raw = RawTally::default();
    for u in 0..view.node_count {
        raw = raw.merge(scan_node(&adjacency, u));
    }

    raw.finalize()
}

/// Parallel Signed Triangle Census
///
/// Same semantics as [`triangle_census`]. Edges are partitioned by their
/// owning (smaller) endpoint, each worker tallies its partition against
/// the shared read-only adjacency, and partial tallies are summed before
/// the divide-by-3 step.
pub fn par_triangle_census(view: &SignedGraphView) -> Result<TriangleCensus, CensusError> {
    let adjacency = adjacency_maps(view);

    let raw = (0..view.node_count)
        .into_par_iter()
        .map(|u| scan_node(&adjacency, u))
        .reduce(RawTally::default, RawTally::merge);

    raw.finalize()
}
