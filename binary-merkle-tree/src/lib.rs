//! Complete binary Merkle tree over an ordered list of elements.
//!
//! The tree is built once from a non-empty list of byte strings, padded with
//! empty elements up to the next power of two, and kept in memory as a flat
//! arena of nodes with parent back-references. Every query walks the path
//! from a leaf to the root, so proofs and updates are `O(log n)`.
//!
//! # Core types
//!
//! - [`MerkleTree`]: builds the tree, exposes the root, generates proofs and
//!   rewrites leaves in place.
//! - [`MerkleProof`]: single element inclusion proof (leaf hash, siblings
//!   and directions).
//! - [`AggregatedMerkleProof`]: proof for a contiguous range anchored at the
//!   range start; verification needs the live tree.
//! - [`RangeProof`]: self-contained proof for a contiguous range, verified
//!   from the range elements alone.
//!
//! # Hashing
//!
//! Hashing is injected through [`MerkleHasher`]. [`Sha256Hasher`] is the
//! default: leaves hash as `sha256(element)` and internal nodes as
//! `sha256(left || right)` over the raw 32-byte digests.
//! [`HexSha256Hasher`] concatenates the lowercase hex text of the children
//! instead, and [`Blake3Hasher`] (requires the `blake3` feature) offers both a
//! plain and a `0x00`/`0x01` domain-separated scheme.

#![warn(missing_docs)]

mod error;
mod hash;
/// Power-of-two arithmetic for sizing the tree.
pub(crate) mod helper;
mod node;
mod options;
mod path;
pub(crate) mod proof;
mod tree;
mod update;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
#[cfg(feature = "blake3")]
pub use hash::Blake3Hasher;
pub use hash::{Hash, HexSha256Hasher, MerkleHasher, Sha256Hasher};
pub use helper::next_power_of_two;
pub use options::TreeOptions;
pub use proof::{
    AggregatedMerkleProof, MerkleProof, RangeProof, verify_aggregated_proof, verify_proof,
    verify_range_proof,
};
pub use tree::MerkleTree;
