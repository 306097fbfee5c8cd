//! Fold preceding sibling runs into collecting nodes.
//!
//! A grammar marks a rule as collecting when its match should become the
//! parent of everything matched before it at the same level, for example to
//! turn a run of repetitions into one aggregate node. The matcher cannot know
//! the final span of such a node until all of its siblings exist, so the
//! span is computed here.

use log::trace;

use super::link;
use crate::Node;
use crate::node::{NodeId, NodeSlice};

/// Apply every `collect` flag reachable from the root.
///
/// Sibling links are rebuilt first, then the tree is walked from
/// [`NodeId::ROOT`] with an explicit work list. Under each parent, a
/// collecting child takes the offset of the parent's current first child and
/// the summed length of the non-collecting children seen so far, adopts every
/// sibling before it and becomes the parent's first child.
///
/// Collecting nodes are not walked further; their own subtrees must already
/// be parented correctly.
///
/// # Panics
///
/// Panics if a `parent` index is outside `nodes`.
pub fn collect(nodes: &mut [Node]) {
    if nodes.is_empty() {
        return;
    }
    link(nodes);

    let mut work = vec![NodeId::ROOT];
    while let Some(parent) = work.pop() {
        let mut length = 0;
        let mut cursor = nodes.node(parent).child;
        while let Some(child) = cursor {
            let node = nodes.node(child);
            cursor = node.next;
            if node.collect {
                absorb(nodes, parent, child, length);
            } else {
                length += node.length;
                work.push(child);
            }
        }
    }
}

/// Reparent the run from `parent`'s first child up to `collector` under
/// `collector`.
fn absorb(nodes: &mut [Node], parent: NodeId, collector: NodeId, length: usize) {
    let first = nodes.node(parent).child.unwrap_or(collector);
    let offset = nodes.node(first).offset;

    let target = nodes.node_mut(collector);
    target.offset = offset;
    target.length = length;

    let mut absorbed = 0_usize;
    let mut cursor = Some(first);
    while let Some(id) = cursor.filter(|&id| id != collector) {
        let node = nodes.node_mut(id);
        node.parent = Some(collector);
        cursor = node.next;
        absorbed += 1;
    }
    nodes.node_mut(parent).child = Some(collector);

    trace!("node {collector} absorbed {absorbed} siblings under {parent}");
}
