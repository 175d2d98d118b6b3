//! Core type definitions for the signed graph model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Sign of an edge weight.
///
/// Exactly 0.0 is `Zero`: absence of sign, not absence of edge. The
/// comparisons are strict, so near-zero values classify by their sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn of(weight: f64) -> Self {
        if weight > 0.0 {
            Sign::Positive
        } else if weight < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
            Sign::Zero => "0",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_of_weight() {
        assert_eq!(Sign::of(0.4), Sign::Positive);
        assert_eq!(Sign::of(-3.0), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_eq!(Sign::of(f64::MIN_POSITIVE), Sign::Positive);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(7).to_string(), "NodeId(7)");
        assert_eq!(NodeId::from(7u64).as_u64(), 7);
    }
}
