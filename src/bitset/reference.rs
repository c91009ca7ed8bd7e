//! Assignable handle on a single bit

use std::fmt;

use super::SegBitSet;
use crate::tree::TreeNode;

/// Mutable handle bound to one resolved leaf of a [`SegBitSet`]
///
/// Obtained from [`SegBitSet::bit_mut`]. The position is validated once,
/// when the handle is created; every write repairs the aggregates on the
/// leaf's root path before returning.
pub struct BitRef<'a, const N: usize> {
    bits: &'a mut SegBitSet<N>,
    leaf: TreeNode,
}

impl<'a, const N: usize> BitRef<'a, N> {
    pub(super) fn new(bits: &'a mut SegBitSet<N>, leaf: TreeNode) -> Self {
        Self { bits, leaf }
    }

    /// Position this handle points at
    #[inline]
    pub fn position(&self) -> usize {
        self.leaf.position()
    }

    /// Current bit value
    #[inline]
    pub fn get(&self) -> bool {
        self.bits.tree.get(self.leaf.index)
    }

    /// Write `value`
    pub fn set(&mut self, value: bool) -> &mut Self {
        self.bits.tree.write_leaf(self.leaf, value);
        self
    }

    /// Invert the bit and return its new value
    pub fn flip(&mut self) -> bool {
        let value = !self.get();
        self.bits.tree.write_leaf(self.leaf, value);
        value
    }

    /// Copy the bit at the same position from `other`
    pub fn assign_from(&mut self, other: &SegBitSet<N>) -> &mut Self {
        let value = other.tree.get(self.leaf.index);
        self.set(value)
    }
}

impl<const N: usize> From<BitRef<'_, N>> for bool {
    fn from(bit: BitRef<'_, N>) -> bool {
        bit.get()
    }
}

impl<const N: usize> fmt::Debug for BitRef<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("position", &self.position())
            .field("value", &self.get())
            .finish()
    }
}
