//! Arena nodes.
//!
//! Nodes live in one `Vec` owned by the tree. Children and parents are
//! referenced by [`NodeId`] (an arena index) rather than by pointer, so the
//! parent back-references form no ownership cycle and identity comparison is
//! index comparison.

use crate::Hash;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One position in the tree.
///
/// Leaves have no children. Internal nodes always have exactly two, and
/// their hash is `hash_node(left.hash, right.hash)`.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) hash: Hash,
    pub(crate) children: Option<(NodeId, NodeId)>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Create a leaf with the given element hash and no parent yet.
    pub(crate) fn leaf(hash: Hash) -> Self {
        Node {
            hash,
            children: None,
            parent: None,
        }
    }

    /// Create an internal node over two children.
    pub(crate) fn internal(hash: Hash, left: NodeId, right: NodeId) -> Self {
        Node {
            hash,
            children: Some((left, right)),
            parent: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
