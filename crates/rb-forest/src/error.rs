use thiserror::Error;

use crate::types::NodeId;

/// Errors returned by tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key not found")]
    KeyNotFound,
    #[error("node {index}v{generation} is not in this tree")]
    StaleNode { index: u32, generation: u32 },
    #[error("node allocation failed")]
    AllocationFailed,
}

impl TreeError {
    pub(crate) fn stale(id: NodeId) -> Self {
        Self::StaleNode {
            index: id.index,
            generation: id.generation,
        }
    }
}

/// A broken structural or coloring invariant, as reported by `validate()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root node {index} has a parent")]
    RootHasParent { index: u32 },
    #[error("node {child} does not point back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node {index} is out of order with its in-order predecessor")]
    OrderViolated { index: u32 },
    #[error("tree reaches {reachable} nodes but holds {len}")]
    CountMismatch { reachable: usize, len: usize },
    #[error("sentinel is not black")]
    SentinelNotBlack,
    #[error("root node {index} is not black")]
    RootNotBlack { index: u32 },
    #[error("red node {index} has a red child")]
    RedRed { index: u32 },
    #[error("black height mismatch under node {index}: left {left}, right {right}")]
    BlackHeightMismatch {
        index: u32,
        left: usize,
        right: usize,
    },
}
