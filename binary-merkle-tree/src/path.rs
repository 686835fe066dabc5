//! Leaf-to-root navigation shared by proof generation and updates.

use crate::{MerkleTree, node::NodeId};

/// One step up the tree: `node` and its `sibling` are the two children of
/// `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathStep {
    pub(crate) node: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) sibling: NodeId,
    /// `true` when the sibling is the left child, i.e. `node` is the right
    /// child and the sibling is the left operand when hashing upward.
    pub(crate) sibling_is_left: bool,
}

/// Iterator over the steps from a node up to the root, in leaf-to-root
/// order.
pub(crate) struct PathWalker<'a, H> {
    tree: &'a MerkleTree<H>,
    cursor: NodeId,
}

impl<H> Iterator for PathWalker<'_, H> {
    type Item = PathStep;

    fn next(&mut self) -> Option<PathStep> {
        let step = self.tree.step(self.cursor)?;
        self.cursor = step.parent;
        Some(step)
    }
}

impl<H> MerkleTree<H> {
    /// The step from `node` to its parent, or `None` once `node` is the
    /// root. The root is recognised by arena identity, never by hash.
    pub(crate) fn step(&self, node: NodeId) -> Option<PathStep> {
        if node == self.root {
            return None;
        }
        let parent = self.node(node).parent?;
        let (left, right) = self.node(parent).children?;
        let (sibling, sibling_is_left) = if left == node {
            (right, false)
        } else {
            (left, true)
        };
        Some(PathStep {
            node,
            parent,
            sibling,
            sibling_is_left,
        })
    }

    /// Walk from `node` to the root.
    pub(crate) fn path(&self, node: NodeId) -> PathWalker<'_, H> {
        PathWalker {
            tree: self,
            cursor: node,
        }
    }
}
