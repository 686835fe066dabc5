//! Hash strategies for leaves and internal nodes.
//!
//! The tree never calls a hash function directly; it goes through the
//! [`MerkleHasher`] it was built with. All strategies produce 32-byte
//! digests.
//!
//! - [`Sha256Hasher`]: `sha256(element)` / `sha256(left || right)`.
//! - [`HexSha256Hasher`]: `sha256(element)` /
//!   `sha256(hex(left) || hex(right))`, with lowercase hex text.
//! - [`Blake3Hasher`]: `blake3(element)` / `blake3(left || right)`, or with
//!   `0x00`/`0x01` leaf/internal domain tags.
//!
//! Neither SHA-256 scheme separates leaf and internal inputs beyond their
//! shape, so a 64-byte element hashes like an internal node. Use
//! [`Blake3Hasher::domain_separated`] when that matters.

use sha2::{Digest, Sha256};

/// A 32-byte digest.
pub type Hash = [u8; 32];

/// Domain tag prepended to leaf inputs by the domain-separated Blake3 scheme.
#[cfg(feature = "blake3")]
const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal inputs by the domain-separated Blake3
/// scheme.
#[cfg(feature = "blake3")]
const INTERNAL_TAG: u8 = 0x01;

/// Hashing strategy injected into a [`MerkleTree`](crate::MerkleTree).
pub trait MerkleHasher {
    /// Hash one element into a leaf digest.
    fn hash_leaf(&self, element: &[u8]) -> Hash;

    /// Combine two child digests, in left-to-right order, into their parent.
    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash;
}

impl<H: MerkleHasher + ?Sized> MerkleHasher for &H {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        (**self).hash_leaf(element)
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        (**self).hash_node(left, right)
    }
}

/// SHA-256 over raw bytes. The default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        Sha256::digest(element).into()
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}

/// SHA-256 over the lowercase hex text of the child digests.
///
/// Leaves are hashed exactly like [`Sha256Hasher`]; internal nodes hash the
/// 128-character string `hex(left) || hex(right)`. Roots produced this way
/// match trees whose digests are carried around as hex strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexSha256Hasher;

impl MerkleHasher for HexSha256Hasher {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        Sha256::digest(element).into()
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(hex::encode(left));
        hasher.update(hex::encode(right));
        hasher.finalize().into()
    }
}

/// Blake3, optionally with leaf/internal domain separation.
#[cfg(feature = "blake3")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher {
    domain_separated: bool,
}

#[cfg(feature = "blake3")]
impl Blake3Hasher {
    /// Plain Blake3: `blake3(element)` and `blake3(left || right)`.
    pub fn new() -> Self {
        Self {
            domain_separated: false,
        }
    }

    /// Domain-separated Blake3: `blake3(0x00 || element)` and
    /// `blake3(0x01 || left || right)`.
    pub fn domain_separated() -> Self {
        Self {
            domain_separated: true,
        }
    }

    /// Whether leaf and internal inputs carry domain tags.
    pub fn is_domain_separated(&self) -> bool {
        self.domain_separated
    }
}

#[cfg(feature = "blake3")]
impl MerkleHasher for Blake3Hasher {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        if self.domain_separated {
            hasher.update(&[LEAF_TAG]);
        }
        hasher.update(element);
        *hasher.finalize().as_bytes()
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        let mut input = [0u8; 65];
        let offset = if self.domain_separated {
            input[0] = INTERNAL_TAG;
            1
        } else {
            0
        };
        input[offset..offset + 32].copy_from_slice(left);
        input[offset + 32..offset + 64].copy_from_slice(right);
        *blake3::hash(&input[..offset + 64]).as_bytes()
    }
}
