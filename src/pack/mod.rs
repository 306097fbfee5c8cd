//! Turn a raw matcher array into a linked tree.
//!
//! Packing runs three passes in a fixed order:
//!
//! 1. [`collect`] folds sibling runs into collecting nodes. It needs the
//!    topology as the matcher produced it, so it goes first.
//! 2. [`prune`] drops removed nodes and compacts the array.
//! 3. [`link`] derives `child`/`next` from the final `parent` links.
//!
//! [`pack`] validates the input, runs the passes and trims the array.

use log::debug;

use crate::{Node, PackError, validate};

mod collect;
mod link;
mod prune;

pub use self::collect::collect;
pub use self::link::link;
pub use self::prune::prune;

/// Pack the first `top` nodes of a matcher array into the final tree.
///
/// Slots at or past `top` are discarded. The returned array holds exactly
/// the surviving nodes with `parent`, `child` and `next` consistent, and no
/// spare capacity.
///
/// # Errors
///
/// Returns a [`PackError`] without modifying anything when `top` exceeds
/// `nodes.len()` or the used slots do not form a valid tree.
///
/// # Examples
///
/// ```
/// use pegtree::{Node, NodeId, pack};
///
/// let mut root = Node::new("sum", None, 0);
/// root.length = 3;
/// let mut lhs = Node::new("num", Some(NodeId::ROOT), 0);
/// lhs.length = 1;
/// let mut op = Node::new("plus", Some(NodeId::ROOT), 1);
/// op.length = 1;
/// op.remove = true;
/// let mut rhs = Node::new("num", Some(NodeId::ROOT), 2);
/// rhs.length = 1;
///
/// let tree = pack(vec![root, lhs, op, rhs], 4).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree[0].child, Some(NodeId::new(1)));
/// assert_eq!(tree[1].next, Some(NodeId::new(2)));
/// ```
pub fn pack(mut nodes: Vec<Node>, top: usize) -> Result<Vec<Node>, PackError> {
    if top > nodes.len() {
        return Err(PackError::TopOutOfRange {
            top,
            len: nodes.len(),
        });
    }
    nodes.truncate(top);
    validate(&nodes)?;

    collect(&mut nodes);
    let kept = prune(&mut nodes);
    nodes.truncate(kept);
    link(&mut nodes);
    nodes.shrink_to_fit();

    debug!("packed {top} nodes into {kept}");
    Ok(nodes)
}
