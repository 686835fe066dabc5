use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from building a tree or generating proofs.
///
/// Every variant is detected before the tree is traversed or mutated, so a
/// failed call leaves the tree untouched.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Tried to build a tree from an empty element list.
    #[error("no elements to create a merkle tree")]
    EmptyInput,
    /// The leaf index is not below the (padded) leaf count.
    #[error("index {index} out of bounds for {leaf_count} leaves")]
    IndexOutOfBounds {
        /// The requested leaf index.
        index: u64,
        /// Leaf count of the tree, padding included.
        leaf_count: u64,
    },
    /// `start >= end`, or `end` is past the last leaf.
    #[error("invalid range {start}..{end} for {leaf_count} leaves")]
    InvalidRange {
        /// First leaf of the range (inclusive).
        start: u64,
        /// End of the range (exclusive).
        end: u64,
        /// Leaf count of the tree, padding included.
        leaf_count: u64,
    },
    /// The range is narrower than the configured minimum width.
    #[error("range {start}..{end} is narrower than the minimum width {min_width}")]
    RangeTooSmall {
        /// First leaf of the range (inclusive).
        start: u64,
        /// End of the range (exclusive).
        end: u64,
        /// The configured minimum width.
        min_width: u64,
    },
    /// Tree options were rejected.
    #[error("invalid tree options: {0}")]
    InvalidOptions(String),
    /// Proof bytes could not be encoded or decoded.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
