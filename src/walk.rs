//! Traversal of a packed tree through its `child`/`next` links.
//!
//! None of these helpers recurse, so arbitrarily deep trees are fine.

use crate::{Node, NodeId};

/// Iterator over a chain of siblings.
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    nodes: &'a [Node],
    next: Option<NodeId>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.nodes.get(id.index())?;
        self.next = node.next;
        Some((id, node))
    }
}

/// Direct children of `id`, in document order.
#[must_use]
pub fn children(nodes: &[Node], id: NodeId) -> Siblings<'_> {
    Siblings {
        nodes,
        next: nodes.get(id.index()).and_then(|n| n.child),
    }
}

/// The chain of parentless nodes, starting at the first one in the array.
#[must_use]
pub fn top_level(nodes: &[Node]) -> Siblings<'_> {
    Siblings {
        nodes,
        next: nodes.iter().position(|n| n.parent.is_none()).map(NodeId::new),
    }
}

/// Pre-order iterator over everything below a node.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.nodes.get(id.index())?;
        self.stack.extend(node.next);
        self.stack.extend(node.child);
        Some((id, node))
    }
}

/// Every node below `id` in pre-order, `id` itself excluded.
#[must_use]
pub fn descendants(nodes: &[Node], id: NodeId) -> Descendants<'_> {
    Descendants {
        nodes,
        stack: nodes.get(id.index()).and_then(|n| n.child).into_iter().collect(),
    }
}

enum Step {
    Enter(NodeId),
    Close,
}

/// Render the linked tree as `name(child child)`, top-level nodes separated
/// by spaces.
///
/// ```
/// use pegtree::{Node, NodeId, pack, walk::render};
///
/// let nodes = vec![
///     Node::new("root", None, 0),
///     Node::new("a", Some(NodeId::ROOT), 0),
///     Node::new("b", Some(NodeId::new(1)), 0),
/// ];
/// let tree = pack(nodes, 3).unwrap();
/// assert_eq!(render(&tree), "root(a(b))");
/// ```
#[must_use]
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    let mut stack: Vec<Step> = top_level(nodes).map(|(id, _)| Step::Enter(id)).collect();
    stack.reverse();
    let mut first_in_group = true;

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                let Some(node) = nodes.get(id.index()) else {
                    continue;
                };
                if !first_in_group {
                    out.push(' ');
                }
                out.push_str(&node.name);
                first_in_group = false;
                if node.child.is_some() {
                    out.push('(');
                    first_in_group = true;
                    stack.push(Step::Close);
                    let kids: Vec<_> = children(nodes, id).map(|(child, _)| child).collect();
                    stack.extend(kids.into_iter().rev().map(Step::Enter));
                }
            }
            Step::Close => {
                out.push(')');
                first_in_group = false;
            }
        }
    }
    out
}
