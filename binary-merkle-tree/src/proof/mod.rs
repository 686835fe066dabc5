//! Inclusion proofs for single elements and contiguous ranges.
//!
//! Every proof is produced from the same leaf-to-root walk. A
//! [`MerkleProof`] records, for each level, the sibling hash and whether the
//! sibling is the left operand:
//!
//! ```text
//! proof for index 2 (marked `h`) carries the nodes marked `*`:
//!
//! d0:                   [ R ]
//! d1:          [ ]                 [*]
//! d2:     [*]       [ ]       [ ]       [ ]
//!        /   \     /   \     /   \     /   \
//! d3:  [ ]  [ ]  [h]  [*]  [ ]  [ ]  [ ]  [ ]
//!
//! siblings   = [d3-3, d2-0, d1-1]
//! directions = [false, true, false]
//! ```

use bincode::{Decode, Encode};
use log::debug;

use crate::{Error, Hash, MerkleHasher, MerkleTree, Result, Sha256Hasher, node::NodeId};

mod aggregated;
mod range;

pub use aggregated::{AggregatedMerkleProof, verify_aggregated_proof};
pub use range::{RangeProof, verify_range_proof};

/// Upper bound on the size of decoded proof bytes.
const DECODE_LIMIT: usize = 16 * 1024 * 1024;

/// Inclusion proof for the element at one leaf index.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    leaf_hash: Hash,
    siblings: Vec<Hash>,
    directions: Vec<bool>,
}

impl MerkleProof {
    /// Create a proof from its parts.
    ///
    /// `directions[i]` is `true` when `siblings[i]` is the left operand at
    /// level `i` (counted from the leaves).
    pub fn new(leaf_hash: Hash, siblings: Vec<Hash>, directions: Vec<bool>) -> Self {
        MerkleProof {
            leaf_hash,
            siblings,
            directions,
        }
    }

    /// Hash of the proved leaf.
    pub fn leaf_hash(&self) -> &Hash {
        &self.leaf_hash
    }

    /// Sibling hashes, leaf to root.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Sibling directions, leaf to root.
    pub fn directions(&self) -> &[bool] {
        &self.directions
    }

    /// Recompute the root this proof commits to, or `None` if the sibling
    /// and direction lists have different lengths.
    pub fn compute_root_with<H: MerkleHasher>(&self, hasher: &H) -> Option<Hash> {
        fold_path(hasher, self.leaf_hash, &self.siblings, &self.directions)
    }

    /// Verify the proof against `root` using `hasher`.
    pub fn verify_with<H: MerkleHasher>(&self, hasher: &H, root: &Hash) -> bool {
        self.compute_root_with(hasher)
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

/// Verify a single element proof against `root` with the default SHA-256
/// hasher.
///
/// Never fails: any mismatch, including misaligned siblings and directions,
/// yields `false`.
pub fn verify_proof(root: &Hash, proof: &MerkleProof) -> bool {
    proof.verify_with(&Sha256Hasher, root)
}

impl<H> MerkleTree<H> {
    /// Generate an inclusion proof for leaf `index`.
    ///
    /// Padding leaves can be proved too. Fails with
    /// [`Error::IndexOutOfBounds`] if `index` is past the last leaf.
    pub fn get_proof(&self, index: u64) -> Result<MerkleProof> {
        let leaf = self.leaf(index)?;
        let (siblings, directions) = self.authentication_path(leaf);
        debug!(
            "generated proof for leaf {} with {} siblings",
            index,
            siblings.len()
        );
        Ok(MerkleProof {
            leaf_hash: self.node(leaf).hash,
            siblings,
            directions,
        })
    }

    /// Sibling hashes and directions from `leaf` to the root.
    pub(crate) fn authentication_path(&self, leaf: NodeId) -> (Vec<Hash>, Vec<bool>) {
        self.path(leaf)
            .map(|step| (self.node(step.sibling).hash, step.sibling_is_left))
            .unzip()
    }
}

/// Hash `start` upward through `siblings`, placing each sibling on the side
/// given by `directions`.
pub(crate) fn fold_path<H: MerkleHasher>(
    hasher: &H,
    start: Hash,
    siblings: &[Hash],
    directions: &[bool],
) -> Option<Hash> {
    if siblings.len() != directions.len() {
        return None;
    }
    let root = siblings
        .iter()
        .zip(directions)
        .fold(start, |current, (sibling, &sibling_is_left)| {
            if sibling_is_left {
                hasher.hash_node(sibling, &current)
            } else {
                hasher.hash_node(&current, sibling)
            }
        });
    Some(root)
}

pub(crate) fn encode<T: Encode>(value: &T) -> Result<Vec<u8>> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_no_limit();
    bincode::encode_to_vec(value, config)
        .map_err(|e| Error::InvalidProof(format!("encode error: {}", e)))
}

pub(crate) fn decode<T: Decode<()>>(bytes: &[u8]) -> Result<T> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_limit::<DECODE_LIMIT>();
    let (value, read) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| Error::InvalidProof(format!("decode error: {}", e)))?;
    if read != bytes.len() {
        return Err(Error::InvalidProof(format!(
            "{} trailing bytes after proof",
            bytes.len() - read
        )));
    }
    Ok(value)
}
