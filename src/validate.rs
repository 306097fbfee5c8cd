//! Forest validation.
//!
//! Runs before any pass so that a malformed array is rejected while it is
//! still untouched. Every check is linear in the number of nodes.

use log::debug;

use crate::node::NodeSlice;
use crate::{Node, NodeId, PackError};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Rooted,
}

/// Check that `nodes` is a single tree rooted at [`NodeId::ROOT`] whose
/// collecting nodes all have something to absorb.
///
/// # Errors
///
/// Returns the first [`PackError`] found.
pub fn validate(nodes: &[Node]) -> Result<(), PackError> {
    check_parents_in_range(nodes)
        .and_then(|()| check_rooted(nodes))
        .and_then(|()| check_collect_siblings(nodes))
        .inspect_err(|err| debug!("rejecting node array: {err}"))
}

fn check_parents_in_range(nodes: &[Node]) -> Result<(), PackError> {
    for (index, node) in nodes.iter().enumerate() {
        if let Some(parent) = node.parent.filter(|p| p.index() >= nodes.len()) {
            return Err(PackError::DanglingParent {
                node: NodeId::new(index),
                parent,
            });
        }
    }
    Ok(())
}

/// Walk each parent chain once, marking nodes on the current path so a
/// revisit is reported as a cycle. Chains end at the root or at a node
/// already known to reach it.
fn check_rooted(nodes: &[Node]) -> Result<(), PackError> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut path = Vec::new();

    for start in 0..nodes.len() {
        let mut current = NodeId::new(start);
        loop {
            let Some(mark) = marks.get_mut(current.index()) else {
                break;
            };
            match *mark {
                Mark::Rooted => break,
                Mark::OnPath => return Err(PackError::ParentCycle { node: current }),
                Mark::Unvisited => *mark = Mark::OnPath,
            }
            path.push(current);
            match nodes.node(current).parent {
                Some(parent) => current = parent,
                None if current == NodeId::ROOT => break,
                None => return Err(PackError::Detached { node: current }),
            }
        }
        for id in path.drain(..) {
            if let Some(mark) = marks.get_mut(id.index()) {
                *mark = Mark::Rooted;
            }
        }
    }
    Ok(())
}

fn check_collect_siblings(nodes: &[Node]) -> Result<(), PackError> {
    let mut has_child = vec![false; nodes.len()];
    for (index, node) in nodes.iter().enumerate() {
        let Some(parent) = node.parent else {
            continue;
        };
        let Some(seen) = has_child.get_mut(parent.index()) else {
            continue;
        };
        if node.collect && !*seen {
            return Err(PackError::CollectWithoutSiblings {
                node: NodeId::new(index),
            });
        }
        *seen = true;
    }
    Ok(())
}
