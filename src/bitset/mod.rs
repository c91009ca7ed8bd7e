//! Fixed-capacity sparse bitset
//!
//! `SegBitSet<N>` is a typed facade over [`AggregateTree`]: it carries the
//! capacity in the type, validates caller-supplied positions, and exposes
//! the bitset vocabulary (test/set/reset/flip, any/all/none/count,
//! first/next/for_each, boolean operators).
//!
//! Capacity lives in the type, so combining two bitsets of different sizes
//! does not compile.

mod convert;
mod ops;
mod reference;

pub use reference::BitRef;

use tracing::{debug, trace};

use crate::tree::{AggregateTree, Ones, TreeNode};
use crate::{Result, SegBitSetError};

/// Bitset of `N` bits backed by a segment tree of OR aggregates
///
/// Space: 1 + 4N bits
pub struct SegBitSet<const N: usize> {
    tree: AggregateTree,
}

impl<const N: usize> SegBitSet<N> {
    /// Create an all-false bitset
    pub fn new() -> Self {
        Self {
            tree: AggregateTree::new(N),
        }
    }

    /// Capacity (always `N`)
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Resolve `pos` to its leaf, or report it out of range for `op`
    fn leaf(&self, op: &'static str, pos: usize) -> Result<TreeNode> {
        if pos >= N {
            return Err(SegBitSetError::OutOfRange { op, pos, size: N });
        }
        Ok(self.tree.find_leaf(pos))
    }

    /// Value of the bit at `pos`
    ///
    /// Time: O(log N)
    pub fn test(&self, pos: usize) -> Result<bool> {
        let leaf = self.leaf("test", pos)?;
        Ok(self.tree.get(leaf.index))
    }

    /// Value of the bit at `pos`, or `None` past the end
    pub fn get(&self, pos: usize) -> Option<bool> {
        self.test(pos).ok()
    }

    /// Write `value` at `pos`
    ///
    /// Time: O(log N) descent + O(log N) aggregate repair
    pub fn set(&mut self, pos: usize, value: bool) -> Result<&mut Self> {
        let leaf = self.leaf("set", pos)?;
        trace!(pos, value, "set bit");
        self.tree.write_leaf(leaf, value);
        Ok(self)
    }

    /// Set the bit at `pos` to true
    pub fn insert(&mut self, pos: usize) -> Result<&mut Self> {
        let leaf = self.leaf("insert", pos)?;
        trace!(pos, "insert bit");
        self.tree.write_leaf(leaf, true);
        Ok(self)
    }

    /// Set the bit at `pos` to false
    pub fn reset(&mut self, pos: usize) -> Result<&mut Self> {
        let leaf = self.leaf("reset", pos)?;
        trace!(pos, "reset bit");
        self.tree.write_leaf(leaf, false);
        Ok(self)
    }

    /// Invert the bit at `pos`
    pub fn flip(&mut self, pos: usize) -> Result<&mut Self> {
        let leaf = self.leaf("flip", pos)?;
        let value = !self.tree.get(leaf.index);
        trace!(pos, value, "flip bit");
        self.tree.write_leaf(leaf, value);
        Ok(self)
    }

    /// Clear every bit
    ///
    /// Only live subtrees are visited: O(k log N) for k set bits.
    pub fn reset_all(&mut self) -> &mut Self {
        debug!(size = N, "reset all bits");
        self.tree.clear();
        self
    }

    /// Invert every bit
    ///
    /// Always O(N): a false subtree turns true, so no subtree can be skipped.
    pub fn flip_all(&mut self) -> &mut Self {
        debug!(size = N, "flip all bits");
        self.tree.invert();
        self
    }

    /// Set every bit. O(N).
    pub fn set_all(&mut self) -> &mut Self {
        debug!(size = N, "set all bits");
        self.tree.fill();
        self
    }

    /// At least one bit is set. O(1).
    #[inline]
    pub fn any(&self) -> bool {
        self.tree.any()
    }

    /// No bit is set. O(1).
    #[inline]
    pub fn none(&self) -> bool {
        !self.tree.any()
    }

    /// Every bit is set (true for `N = 0`)
    pub fn all(&self) -> bool {
        self.tree.all()
    }

    /// Number of set bits
    ///
    /// Time: O(k log N) for k set bits, O(N) when dense
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Position of the lowest set bit
    pub fn first(&self) -> Option<usize> {
        self.tree.first_one()
    }

    /// Position of the lowest set bit strictly after `pos`
    ///
    /// `pos` itself is never returned, even if set. Any `pos` is accepted.
    pub fn next(&self, pos: usize) -> Option<usize> {
        self.tree.next_one(pos)
    }

    /// Call `visit` with each set position, in ascending order
    ///
    /// A single pruned descent; cheaper than chaining [`first`](Self::first)
    /// and [`next`](Self::next).
    pub fn for_each<F: FnMut(usize)>(&self, visit: F) {
        self.tree.visit_ones(visit);
    }

    /// Iterator over set positions, in ascending order
    pub fn iter(&self) -> Ones<'_> {
        self.tree.ones()
    }

    /// Assignable handle on the bit at `pos`
    pub fn bit_mut(&mut self, pos: usize) -> Result<BitRef<'_, N>> {
        let leaf = self.leaf("bit_mut", pos)?;
        Ok(BitRef::new(self, leaf))
    }

    /// Check the aggregate invariant on every node
    #[doc(hidden)]
    pub fn check_invariant(&self) -> bool {
        self.tree.check_invariant()
    }
}

impl<const N: usize> Default for SegBitSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a SegBitSet<N> {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
