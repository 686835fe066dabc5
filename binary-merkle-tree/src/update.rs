use log::trace;

use crate::{MerkleHasher, MerkleTree, Result};

impl<H: MerkleHasher> MerkleTree<H> {
    /// Replace the element at leaf `index` and rehash every ancestor up to
    /// the root.
    ///
    /// Padding leaves (indices between the element count and the leaf count)
    /// can be updated too. Fails with
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) before
    /// touching the tree if `index` is past the last leaf.
    ///
    /// Only the `height()` ancestors of the leaf are rewritten; sibling
    /// subtrees are read but never modified.
    pub fn update_element<T: AsRef<[u8]>>(&mut self, index: u64, element: T) -> Result<()> {
        let leaf = self.leaf(index)?;
        debug_assert!(self.node(leaf).is_leaf());
        self.nodes[leaf.index()].hash = self.hasher.hash_leaf(element.as_ref());

        let mut cursor = leaf;
        while let Some(step) = self.step(cursor) {
            let node = &self.node(step.node).hash;
            let sibling = &self.node(step.sibling).hash;
            let hash = if step.sibling_is_left {
                self.hasher.hash_node(sibling, node)
            } else {
                self.hasher.hash_node(node, sibling)
            };
            self.nodes[step.parent.index()].hash = hash;
            cursor = step.parent;
        }

        trace!(
            "updated leaf {} of {}, new root {}",
            index,
            self.leaf_count(),
            hex::encode(self.root())
        );
        Ok(())
    }
}
