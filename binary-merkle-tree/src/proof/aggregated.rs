//! Start-anchored proofs for contiguous ranges.
//!
//! An [`AggregatedMerkleProof`] names a half-open range `start..end` but only
//! carries the authentication path of the leaf at `start`. Verification
//! therefore reads the start leaf hash from the live tree and never looks at
//! `end`'s path; it shows that the tree still contains its own `start` leaf
//! under `root`. Use [`RangeProof`](crate::RangeProof) to authenticate every
//! element in the range.

use bincode::{Decode, Encode};
use log::debug;

use super::{decode, encode, fold_path};
use crate::{Hash, MerkleHasher, MerkleTree, Result};

/// Range proof anchored at the first leaf of `start..end`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AggregatedMerkleProof {
    start: u64,
    end: u64,
    siblings: Vec<Hash>,
    directions: Vec<bool>,
}

impl AggregatedMerkleProof {
    /// Create a proof from its parts.
    pub fn new(start: u64, end: u64, siblings: Vec<Hash>, directions: Vec<bool>) -> Self {
        AggregatedMerkleProof {
            start,
            end,
            siblings,
            directions,
        }
    }

    /// First leaf index of the range (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// End of the range (exclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Sibling hashes along the path from `start` to the root.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Sibling directions along the path from `start` to the root.
    pub fn directions(&self) -> &[bool] {
        &self.directions
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

impl<H> MerkleTree<H> {
    /// Generate a start-anchored proof for the range `start..end`.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) if
    /// `start >= end` or `end` is past the last leaf, and with
    /// [`Error::RangeTooSmall`](crate::Error::RangeTooSmall) if the range is
    /// narrower than [`TreeOptions::min_range_width`](crate::TreeOptions::min_range_width).
    pub fn get_aggregated_proof(&self, start: u64, end: u64) -> Result<AggregatedMerkleProof> {
        self.validate_range(start, end)?;
        let leaf = self.leaf(start)?;
        let (siblings, directions) = self.authentication_path(leaf);
        debug!(
            "generated aggregated proof for {}..{} with {} siblings",
            start,
            end,
            siblings.len()
        );
        Ok(AggregatedMerkleProof {
            start,
            end,
            siblings,
            directions,
        })
    }
}

/// Verify an aggregated proof against `root`, reading the start leaf hash
/// from `tree` and hashing with the tree's own hasher.
///
/// Returns `false` if the range is out of bounds for `tree`, if siblings and
/// directions are misaligned, or if the recomputed root differs.
pub fn verify_aggregated_proof<H: MerkleHasher>(
    root: &Hash,
    proof: &AggregatedMerkleProof,
    tree: &MerkleTree<H>,
) -> bool {
    if tree.check_range_bounds(proof.start, proof.end).is_err() {
        return false;
    }
    let Some(start_hash) = tree.leaf_hash(proof.start) else {
        return false;
    };
    fold_path(tree.hasher(), start_hash, &proof.siblings, &proof.directions)
        .is_some_and(|computed| &computed == root)
}
