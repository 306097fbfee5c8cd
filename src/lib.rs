//! Library crate for pegtree.
//!
//! Packs the flat node array written by a PEG matcher into a linked syntax
//! tree: collecting nodes absorb their preceding siblings, removed nodes are
//! dropped with their children reattached upwards, and `child`/`next` links
//! are derived from the surviving `parent` links.

#![forbid(unsafe_code)]

pub mod error;
pub mod node;
pub mod pack;
pub mod validate;
pub mod walk;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::PackError;
pub use node::{Node, NodeId, Span};
pub use pack::{collect, link, pack, prune};
pub use validate::validate;
