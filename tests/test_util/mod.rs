//! Shared test utilities for integration tests.
//!
//! These helpers build matcher-shaped node arrays and inspect packed trees.
//! They mirror a subset of the `pegtree::test_util` module without requiring
//! the `test-support` feature.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use pegtree::walk::{descendants, top_level};
use pegtree::{Node, NodeId, pack};

/// Description of one matcher node: parent slot, flags and span.
#[derive(Debug, Clone)]
pub struct Slot {
    pub parent: Option<usize>,
    pub remove: bool,
    pub collect: bool,
    pub offset: usize,
    pub length: usize,
}

/// Build a node array from slots, naming each node `n<index>`.
#[must_use]
pub fn build(slots: &[Slot]) -> Vec<Node> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let mut node = Node::new(format!("n{index}"), slot.parent.map(NodeId::new), slot.offset);
            node.length = slot.length;
            node.success = true;
            node.remove = slot.remove;
            node.collect = slot.collect;
            node
        })
        .collect()
}

/// Recover the original slot index from a node named by [`build`].
#[must_use]
pub fn original_index(node: &Node) -> usize {
    node.name
        .strip_prefix('n')
        .and_then(|digits| digits.parse().ok())
        .unwrap_or_else(|| panic!("unexpected node name {}", node.name))
}

/// Pack every slot of `nodes`, failing the test on a rejected array.
#[must_use]
pub fn pack_all(nodes: Vec<Node>) -> Vec<Node> {
    let top = nodes.len();
    match pack(nodes, top) {
        Ok(packed) => packed,
        Err(err) => panic!("array should pack: {err}"),
    }
}

/// Number of nodes reachable through the top-level chain and `child`/`next`.
#[must_use]
pub fn reachable(nodes: &[Node]) -> usize {
    top_level(nodes)
        .map(|(id, _)| 1 + descendants(nodes, id).count())
        .sum()
}
