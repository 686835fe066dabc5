use std::cell::Cell;

use sha2::{Digest, Sha256};

use crate::{Hash, MerkleHasher};

/// `sha256(bytes)`, computed independently of the crate's hashers.
pub(crate) fn sha256(bytes: &[u8]) -> Hash {
    Sha256::digest(bytes).into()
}

/// `sha256(left || right)`, computed independently of the crate's hashers.
pub(crate) fn sha256_pair(left: &Hash, right: &Hash) -> Hash {
    let mut input = Vec::with_capacity(64);
    input.extend_from_slice(left);
    input.extend_from_slice(right);
    sha256(&input)
}

/// Distinct, deterministic elements `element-0`, `element-1`, ...
pub(crate) fn elements(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("element-{}", i).into_bytes())
        .collect()
}

/// Cheap, non-cryptographic, order-sensitive hasher for structural tests.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct XorHasher;

impl MerkleHasher for XorHasher {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        let mut out = [0u8; 32];
        out[0] = element.len() as u8;
        for (i, byte) in element.iter().enumerate() {
            out[(i + 1) % 32] ^= byte.wrapping_add(i as u8);
        }
        out
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = left[i].rotate_left(3) ^ right[(i + 7) % 32] ^ 0xA5;
        }
        out
    }
}

/// Wraps a hasher and counts how often each function is called.
#[derive(Debug, Default)]
pub(crate) struct CountingHasher<H> {
    inner: H,
    leaf_calls: Cell<usize>,
    node_calls: Cell<usize>,
}

impl<H> CountingHasher<H> {
    pub(crate) fn new(inner: H) -> Self {
        CountingHasher {
            inner,
            leaf_calls: Cell::new(0),
            node_calls: Cell::new(0),
        }
    }

    pub(crate) fn leaf_calls(&self) -> usize {
        self.leaf_calls.get()
    }

    pub(crate) fn node_calls(&self) -> usize {
        self.node_calls.get()
    }

    pub(crate) fn reset(&self) {
        self.leaf_calls.set(0);
        self.node_calls.set(0);
    }
}

impl<H: MerkleHasher> MerkleHasher for CountingHasher<H> {
    fn hash_leaf(&self, element: &[u8]) -> Hash {
        self.leaf_calls.set(self.leaf_calls.get() + 1);
        self.inner.hash_leaf(element)
    }

    fn hash_node(&self, left: &Hash, right: &Hash) -> Hash {
        self.node_calls.set(self.node_calls.get() + 1);
        self.inner.hash_node(left, right)
    }
}
