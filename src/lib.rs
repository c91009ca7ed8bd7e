//! # Sparse Bitset on a Segment Tree
//!
//! A fixed-capacity bitset for data where most bits are false and the hot
//! operations are "is anything set here?" and "where are the set bits?".
//!
//! ## Core Idea
//!
//! A flat bitset answers both questions by scanning all N bits. Here a
//! binary aggregation tree sits on top of the bits:
//!
//! 1. **Leaves** hold the N bit values
//! 2. **Internal nodes** hold the OR of their two children
//! 3. **Pruning**: a false node proves its whole subtree is false, so
//!    search, counting, clearing and combination skip it in O(1)
//!
//! Result: `any()` is O(1), `first()`/`next()` are O(log N), and enumerating
//! or clearing k set bits costs O(k log N) instead of O(N).
//!
//! ## Usage Example
//!
//! ```
//! use segbitset::SegBitSet;
//!
//! let mut bits = SegBitSet::<16>::new();
//! bits.insert(1)?.insert(3)?.insert(9)?;
//!
//! assert_eq!(bits.count(), 3);
//! assert_eq!(bits.first(), Some(1));
//! assert_eq!(bits.next(3), Some(9));
//! assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 3, 9]);
//! # Ok::<(), segbitset::SegBitSetError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod bitset; // Typed bitset facade
pub mod tree; // Aggregation tree storage and walks

pub use bitset::{BitRef, SegBitSet};
pub use tree::{AggregateTree, Ones, TreeNode};

use thiserror::Error;

/// Errors raised by bitset operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegBitSetError {
    /// A position at or beyond the capacity was supplied
    #[error("{op}: position {pos} out of range for bitset of size {size}")]
    OutOfRange {
        /// Operation that rejected the position
        op: &'static str,
        /// Position that was requested
        pos: usize,
        /// Capacity of the bitset
        size: usize,
    },

    /// Flat input does not have exactly N bits
    #[error("flat bit vector has {actual} bits, expected {expected}")]
    LengthMismatch {
        /// Capacity of the bitset
        expected: usize,
        /// Length of the supplied input
        actual: usize,
    },
}

/// Result alias for bitset operations
pub type Result<T> = std::result::Result<T, SegBitSetError>;
