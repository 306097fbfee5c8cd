//! Parse-tree node records and their arena indices.
//!
//! The matcher appends one [`Node`] per rule application to a flat array in
//! document order. Nodes refer to each other through [`NodeId`] indices into
//! that array rather than through references, so the array alone owns every
//! node and a removed node can never leave a dangling link behind.

use std::fmt;

/// Byte range of a node within the source text.
pub type Span = std::ops::Range<usize>;

/// Stable index of a node in the backing array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of the tree always occupies the first slot.
    pub const ROOT: Self = Self(0);

    /// Wrap an array index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The array index this id refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One grammar-rule application.
///
/// `child` and `next` are outputs of [`pack`](crate::pack): whatever the
/// matcher leaves there is overwritten. `last` and `nextout` belong to the
/// matcher and are carried through untouched; they index the array as it was
/// before packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Rule identifier.
    pub name: String,
    /// Start of the matched text.
    pub offset: usize,
    /// Length of the matched text.
    pub length: usize,
    /// Logical parent, `None` for top-level nodes.
    pub parent: Option<NodeId>,
    /// First child in document order.
    pub child: Option<NodeId>,
    /// Next sibling in document order.
    pub next: Option<NodeId>,
    /// Matcher bookkeeping.
    pub last: Option<NodeId>,
    /// Matcher bookkeeping.
    pub nextout: usize,
    /// Whether the rule matched.
    pub success: bool,
    /// Drop this node and hand its children to the nearest kept ancestor.
    pub remove: bool,
    /// Adopt the run of preceding siblings as children.
    pub collect: bool,
}

impl Node {
    /// Create a node the way the matcher allocates one: empty span, no
    /// forward links and every flag cleared.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: Option<NodeId>, offset: usize) -> Self {
        Self {
            name: name.into(),
            offset,
            length: 0,
            parent,
            child: None,
            next: None,
            last: None,
            nextout: 0,
            success: false,
            remove: false,
            collect: false,
        }
    }

    /// Source range covered by this node.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `offset + length` overflows `usize`.
    #[must_use]
    pub fn span(&self) -> Span {
        self.offset..self.offset + self.length
    }

    /// Text matched by this node, or `None` if the span does not fit `src`.
    #[must_use]
    pub fn text<'a>(&self, src: &'a str) -> Option<&'a str> {
        let end = self.offset.checked_add(self.length)?;
        src.get(self.offset..end)
    }
}

/// Index-based access to nodes stored in a slice.
///
/// Every pass addresses nodes through [`NodeId`]s taken from the slice
/// itself, so an id out of range means the input forest was malformed.
pub(crate) trait NodeSlice {
    fn node(&self, id: NodeId) -> &Node;
    fn node_mut(&mut self, id: NodeId) -> &mut Node;
}

impl NodeSlice for [Node] {
    #[expect(
        clippy::indexing_slicing,
        reason = "an out-of-range id is a precondition violation and must panic"
    )]
    fn node(&self, id: NodeId) -> &Node {
        &self[id.index()]
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "an out-of-range id is a precondition violation and must panic"
    )]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self[id.index()]
    }
}
