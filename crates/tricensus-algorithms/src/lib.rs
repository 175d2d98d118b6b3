pub mod common;
pub mod census;

pub use common::{NodeId, SignedGraphView};
pub use census::{triangle_census, par_triangle_census, CensusError, TriangleCensus};
