//! Self-contained proofs for contiguous ranges.
//!
//! A [`RangeProof`] for `start..end` carries only the hashes bordering the
//! range. At each level, walking up from the leaves, the range covers nodes
//! `lo..hi`:
//!
//! - if `lo` is a right child, its left sibling is recorded;
//! - if `hi - 1` is a left child, its right sibling is recorded;
//!
//! and the covered span shrinks to `lo / 2..hi.div_ceil(2)`. Everything in
//! between is recomputed by the verifier from the range elements, so at most
//! two hashes per level are needed.

use bincode::{Decode, Encode};
use log::debug;

use super::{decode, encode};
use crate::{Hash, MerkleHasher, MerkleTree, Result, Sha256Hasher};

/// Proof that `start..end` holds a given run of elements.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct RangeProof {
    leaf_count: u64,
    start: u64,
    end: u64,
    siblings: Vec<Hash>,
}

impl RangeProof {
    /// Create a proof from its parts.
    pub fn new(leaf_count: u64, start: u64, end: u64, siblings: Vec<Hash>) -> Self {
        RangeProof {
            leaf_count,
            start,
            end,
            siblings,
        }
    }

    /// Leaf count (including padding) of the tree the proof was taken from.
    pub fn leaf_count(&self) -> u64 {
        self.leaf_count
    }

    /// First leaf index of the range (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// End of the range (exclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Boundary sibling hashes, level by level from the leaves; within a
    /// level the left boundary comes first.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Recompute the root from the elements of the range, or `None` if the
    /// proof is malformed or the element count does not match the range.
    pub fn compute_root_with<H, I, T>(&self, hasher: &H, elements: I) -> Option<Hash>
    where
        H: MerkleHasher,
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        if !self.leaf_count.is_power_of_two()
            || self.start >= self.end
            || self.end > self.leaf_count
        {
            return None;
        }
        let mut level: Vec<Hash> = elements
            .into_iter()
            .map(|element| hasher.hash_leaf(element.as_ref()))
            .collect();
        if level.len() as u64 != self.end - self.start {
            return None;
        }

        let mut siblings = self.siblings.iter();
        let (mut lo, mut hi, mut width) = (self.start, self.end, self.leaf_count);
        while width > 1 {
            if lo % 2 == 1 {
                level.insert(0, *siblings.next()?);
                lo -= 1;
            }
            if hi % 2 == 1 {
                level.push(*siblings.next()?);
                hi += 1;
            }
            level = level
                .chunks_exact(2)
                .map(|pair| hasher.hash_node(&pair[0], &pair[1]))
                .collect();
            lo /= 2;
            hi /= 2;
            width /= 2;
        }

        if siblings.next().is_some() {
            return None;
        }
        match level.as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    /// Verify that `elements` occupy `start..end` in the tree with `root`.
    ///
    /// Never fails: a malformed proof, a wrong element count or a root
    /// mismatch all yield `false`.
    pub fn verify_with<H, I, T>(&self, hasher: &H, root: &Hash, elements: I) -> bool
    where
        H: MerkleHasher,
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.compute_root_with(hasher, elements)
            .is_some_and(|computed| &computed == root)
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}

/// Verify a range proof with the default SHA-256 hasher.
pub fn verify_range_proof<I, T>(root: &Hash, proof: &RangeProof, elements: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    proof.verify_with(&Sha256Hasher, root, elements)
}

impl<H> MerkleTree<H> {
    /// Generate a proof for every element in `start..end`.
    ///
    /// Walks the paths of the first and the last leaf of the range side by
    /// side, keeping only the siblings that lie outside the range. Fails
    /// like [`MerkleTree::get_aggregated_proof`].
    pub fn get_range_proof(&self, start: u64, end: u64) -> Result<RangeProof> {
        self.validate_range(start, end)?;
        let lower = self.leaf(start)?;
        let upper = self.leaf(end - 1)?;

        let mut siblings = Vec::new();
        for (low, high) in self.path(lower).zip(self.path(upper)) {
            if low.sibling_is_left {
                siblings.push(self.node(low.sibling).hash);
            }
            if !high.sibling_is_left {
                siblings.push(self.node(high.sibling).hash);
            }
        }

        debug!(
            "generated range proof for {}..{} with {} siblings",
            start,
            end,
            siblings.len()
        );
        Ok(RangeProof {
            leaf_count: self.leaf_count(),
            start,
            end,
            siblings,
        })
    }
}
