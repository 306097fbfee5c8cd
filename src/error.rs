//! Precondition violations detected before packing.
//!
//! The matcher is responsible for handing over a well-formed forest. When it
//! does not, [`validate`](crate::validate) reports the first problem found
//! and [`pack`](crate::pack) refuses to touch the array.

use crate::NodeId;

/// A malformed node array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// More slots were claimed than the array holds.
    #[error("top {top} exceeds node array length {len}")]
    TopOutOfRange { top: usize, len: usize },
    /// A parent index points past the used slots.
    #[error("node {node} refers to parent {parent} outside the used slots")]
    DanglingParent { node: NodeId, parent: NodeId },
    /// Following parents from this node leads back to it.
    #[error("parent chain through node {node} forms a cycle")]
    ParentCycle { node: NodeId },
    /// A parentless node other than the root.
    #[error("node {node} has no parent but is not the root")]
    Detached { node: NodeId },
    /// A collecting node with nothing before it to absorb.
    #[error("collecting node {node} has no preceding sibling")]
    CollectWithoutSiblings { node: NodeId },
}
