//! Helpers for assembling node arrays in tests.
//!
//! [`ForestBuilder`] appends nodes in document order the way the matcher
//! does, so tests can describe a raw parse array in a few lines.

use crate::{Node, NodeId};

/// Append-only builder for matcher-shaped node arrays.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use pegtree::NodeId;
/// use pegtree::test_util::ForestBuilder;
///
/// let mut forest = ForestBuilder::new("root", 0, 2);
/// let ws = forest.add(NodeId::ROOT, "ws", 0, 1);
/// forest.mark_remove(ws);
/// assert_eq!(forest.build().len(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForestBuilder {
    nodes: Vec<Node>,
}

impl ForestBuilder {
    /// Start a forest with a successful root node.
    #[must_use]
    pub fn new(name: &str, offset: usize, length: usize) -> Self {
        let mut root = Node::new(name, None, offset);
        root.length = length;
        root.success = true;
        Self { nodes: vec![root] }
    }

    /// Append a successful node under `parent` and return its id.
    pub fn add(&mut self, parent: NodeId, name: &str, offset: usize, length: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let mut node = Node::new(name, Some(parent), offset);
        node.length = length;
        node.success = true;
        self.nodes.push(node);
        id
    }

    /// Flag `id` for removal.
    pub fn mark_remove(&mut self, id: NodeId) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.remove = true;
        }
        self
    }

    /// Flag `id` as a collecting node.
    pub fn mark_collect(&mut self, id: NodeId) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.collect = true;
        }
        self
    }

    /// Finish the array.
    #[must_use]
    pub fn build(self) -> Vec<Node> {
        self.nodes
    }
}

/// Find the index of the node called `name`.
#[must_use]
pub fn find(nodes: &[Node], name: &str) -> Option<NodeId> {
    nodes.iter().position(|n| n.name == name).map(NodeId::new)
}

/// Fetch a node by id, panicking with a readable message when it is missing.
#[must_use]
pub fn node(nodes: &[Node], id: NodeId) -> &Node {
    nodes
        .get(id.index())
        .unwrap_or_else(|| panic!("no node {id} in array of {}", nodes.len()))
}

/// Fetch a node by name, panicking when it is missing.
#[must_use]
pub fn named<'a>(nodes: &'a [Node], name: &str) -> &'a Node {
    nodes
        .iter()
        .find(|n| n.name == name)
        .unwrap_or_else(|| panic!("no node named {name}"))
}
