use log::debug;

use crate::{
    Error, Hash, MerkleHasher, Result, Sha256Hasher, TreeOptions,
    helper::{height_for_leaf_count, next_power_of_two},
    node::{Node, NodeId},
};

/// A complete binary Merkle tree.
///
/// The element list is padded with empty elements up to the next power of
/// two, so the tree is always perfectly balanced. Nodes are stored in one
/// arena in build order: the padded leaves first, then every internal level
/// bottom-up, with the root last.
///
/// ```text
/// index:  0   1   2   3   4     5     6
///        [l0, l1, l2, l3, n01, n23, root]
/// ```
///
/// Leaves are never replaced; [`MerkleTree::update_element`] rewrites a leaf
/// hash in place, so leaf indices stay stable for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct MerkleTree<H = Sha256Hasher> {
    pub(crate) hasher: H,
    pub(crate) options: TreeOptions,
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<NodeId>,
    pub(crate) root: NodeId,
    pub(crate) element_count: u64,
}

impl MerkleTree<Sha256Hasher> {
    /// Build a tree over `elements` with the default SHA-256 hasher.
    pub fn new<I, T>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Self::with_hasher(Sha256Hasher, elements)
    }
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree over `elements` using `hasher` and default options.
    pub fn with_hasher<I, T>(hasher: H, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Self::with_options(hasher, TreeOptions::default(), elements)
    }

    /// Build a tree over `elements` using `hasher` and `options`.
    ///
    /// Fails with [`Error::EmptyInput`] if `elements` is empty.
    pub fn with_options<I, T>(hasher: H, options: TreeOptions, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        options.validate()?;

        let mut nodes: Vec<Node> = elements
            .into_iter()
            .map(|element| Node::leaf(hasher.hash_leaf(element.as_ref())))
            .collect();
        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let element_count = nodes.len() as u64;
        let leaf_count = next_power_of_two(element_count) as usize;
        let padding = hasher.hash_leaf(&[]);
        nodes.resize(leaf_count, Node::leaf(padding));
        nodes.reserve_exact(leaf_count - 1);

        let leaves: Vec<NodeId> = (0..leaf_count).map(NodeId::new).collect();

        let mut level = 0..leaf_count;
        while level.len() > 1 {
            let next_start = nodes.len();
            for left_index in level.clone().step_by(2) {
                let left = NodeId::new(left_index);
                let right = NodeId::new(left_index + 1);
                let parent = NodeId::new(nodes.len());
                let hash = hasher.hash_node(&nodes[left_index].hash, &nodes[left_index + 1].hash);
                nodes[left.index()].parent = Some(parent);
                nodes[right.index()].parent = Some(parent);
                nodes.push(Node::internal(hash, left, right));
            }
            level = next_start..nodes.len();
        }
        let root = NodeId::new(level.start);

        debug!(
            "built merkle tree: {} elements, {} leaves, {} nodes, root {}",
            element_count,
            leaf_count,
            nodes.len(),
            hex::encode(nodes[root.index()].hash)
        );

        Ok(MerkleTree {
            hasher,
            options,
            nodes,
            leaves,
            root,
            element_count,
        })
    }
}

impl<H> MerkleTree<H> {
    /// The current root hash.
    pub fn root(&self) -> Hash {
        self.node(self.root).hash
    }

    /// Number of leaves, including padding. Always a power of two.
    pub fn leaf_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Number of elements the tree was built from, excluding padding.
    pub fn element_count(&self) -> u64 {
        self.element_count
    }

    /// Number of levels above the leaves; `0` for a single-leaf tree.
    pub fn height(&self) -> u32 {
        height_for_leaf_count(self.leaf_count())
    }

    /// The hash currently stored at leaf `index`, or `None` past the last
    /// leaf. Padding leaves are addressable.
    pub fn leaf_hash(&self, index: u64) -> Option<Hash> {
        self.leaf(index).ok().map(|leaf| self.node(leaf).hash)
    }

    /// The hashing strategy this tree was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The options this tree was built with.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Resolve a leaf index, rejecting anything at or past the leaf count.
    pub(crate) fn leaf(&self, index: u64) -> Result<NodeId> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.leaves.get(i).copied())
            .ok_or(Error::IndexOutOfBounds {
                index,
                leaf_count: self.leaf_count(),
            })
    }

    /// Check that `start..end` is a non-empty range within the leaves.
    pub(crate) fn check_range_bounds(&self, start: u64, end: u64) -> Result<()> {
        if start >= end || end > self.leaf_count() {
            return Err(Error::InvalidRange {
                start,
                end,
                leaf_count: self.leaf_count(),
            });
        }
        Ok(())
    }

    /// Check range bounds, then the configured minimum width.
    pub(crate) fn validate_range(&self, start: u64, end: u64) -> Result<()> {
        self.check_range_bounds(start, end)?;
        let min_width = self.options.min_range_width();
        if end - start < min_width {
            return Err(Error::RangeTooSmall {
                start,
                end,
                min_width,
            });
        }
        Ok(())
    }
}
