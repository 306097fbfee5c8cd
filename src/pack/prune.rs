//! Drop removed nodes and compact the array.

use std::collections::HashMap;

use crate::Node;
use crate::node::{NodeId, NodeSlice};

/// Remove every node flagged `remove`, returning the number of kept nodes.
///
/// Children of a removed node are handed to its nearest kept ancestor, or
/// become parentless when no such ancestor exists. Kept nodes move down into
/// `nodes[..kept]` in their original order and their `parent` indices are
/// rewritten to the new slots. The tail `nodes[kept..]` holds the removed
/// nodes in unspecified order. Nothing is reallocated.
///
/// # Panics
///
/// Panics if a `parent` index is outside `nodes`. A cycle of removed nodes
/// never terminates.
pub fn prune(nodes: &mut [Node]) -> usize {
    let mut slots: Vec<Option<NodeId>> = Vec::with_capacity(nodes.len());
    let mut kept = 0;
    for node in &*nodes {
        if node.remove {
            slots.push(None);
        } else {
            slots.push(Some(NodeId::new(kept)));
            kept += 1;
        }
    }

    let mut replace: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    for index in 0..nodes.len() {
        let id = NodeId::new(index);
        let node = nodes.node(id);
        let ancestor = surviving_ancestor(nodes, &mut replace, node.parent);
        if node.remove {
            replace.insert(id, ancestor);
        } else {
            nodes.node_mut(id).parent = ancestor;
        }
    }

    let mut to = 0;
    for index in 0..nodes.len() {
        if nodes.node(NodeId::new(index)).remove {
            continue;
        }
        let node = nodes.node_mut(NodeId::new(index));
        node.parent = node
            .parent
            .and_then(|p| slots.get(p.index()).copied().flatten());
        nodes.swap(to, index);
        to += 1;
    }
    to
}

/// Nearest kept node at or above `parent`.
///
/// Every removed node walked on the way up is recorded in `replace` with the
/// same answer, so each node is climbed past at most once per pass.
fn surviving_ancestor(
    nodes: &[Node],
    replace: &mut HashMap<NodeId, Option<NodeId>>,
    mut parent: Option<NodeId>,
) -> Option<NodeId> {
    let mut path = Vec::new();
    let resolved = loop {
        let Some(id) = parent else {
            break None;
        };
        if let Some(&resolved) = replace.get(&id) {
            break resolved;
        }
        let node = nodes.node(id);
        if !node.remove {
            break Some(id);
        }
        path.push(id);
        parent = node.parent;
    };
    for id in path {
        replace.insert(id, resolved);
    }
    resolved
}
