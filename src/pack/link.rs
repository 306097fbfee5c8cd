//! Derive `child`/`next` links from `parent` back-references.

use crate::Node;
use crate::node::{NodeId, NodeSlice};

/// Rebuild the forward links of `nodes` in one left-to-right pass.
///
/// Children are linked in array order, which is document order. Parentless
/// nodes are chained together through `next`. Any previous `child`/`next`
/// values are discarded first, so running the pass twice gives the same
/// result.
///
/// # Panics
///
/// Panics if a `parent` index is outside `nodes`.
pub fn link(nodes: &mut [Node]) {
    for node in &mut *nodes {
        node.child = None;
        node.next = None;
    }

    let mut last_child: Vec<Option<NodeId>> = vec![None; nodes.len()];
    let mut last_top_level: Option<NodeId> = None;

    for index in 0..nodes.len() {
        let id = NodeId::new(index);
        match nodes.node(id).parent {
            None => {
                if let Some(prev) = last_top_level.replace(id) {
                    nodes.node_mut(prev).next = Some(id);
                }
            }
            Some(parent) => {
                let prev = last_child
                    .get_mut(parent.index())
                    .and_then(|slot| slot.replace(id));
                match prev {
                    Some(prev) => nodes.node_mut(prev).next = Some(id),
                    None => nodes.node_mut(parent).child = Some(id),
                }
            }
        }
    }
}
