//! Boolean combination of bitsets
//!
//! In-place forms prune through the aggregates (see [`crate::tree`]); the
//! value-returning operators clone the left operand and combine into it.
//! `!` always costs O(N).

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use tracing::debug;

use super::SegBitSet;

impl<const N: usize> SegBitSet<N> {
    /// `self[i] &= other[i]` for every position
    ///
    /// Subtrees already empty in `self` are skipped.
    pub fn and_assign(&mut self, other: &Self) -> &mut Self {
        debug!(size = N, "and-assign bitsets");
        self.tree.and_with(&other.tree);
        self
    }

    /// `self[i] |= other[i]` for every position
    ///
    /// Subtrees empty in `other` are skipped.
    pub fn or_assign(&mut self, other: &Self) -> &mut Self {
        debug!(size = N, "or-assign bitsets");
        self.tree.or_with(&other.tree);
        self
    }

    /// `self[i] ^= other[i]` for every position
    ///
    /// Subtrees empty in `other` are skipped.
    pub fn xor_assign(&mut self, other: &Self) -> &mut Self {
        debug!(size = N, "xor-assign bitsets");
        self.tree.xor_with(&other.tree);
        self
    }
}

impl<const N: usize> BitAndAssign<&SegBitSet<N>> for SegBitSet<N> {
    #[inline]
    fn bitand_assign(&mut self, rhs: &SegBitSet<N>) {
        self.and_assign(rhs);
    }
}

impl<const N: usize> BitAndAssign for SegBitSet<N> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.and_assign(&rhs);
    }
}

impl<const N: usize> BitOrAssign<&SegBitSet<N>> for SegBitSet<N> {
    #[inline]
    fn bitor_assign(&mut self, rhs: &SegBitSet<N>) {
        self.or_assign(rhs);
    }
}

impl<const N: usize> BitOrAssign for SegBitSet<N> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.or_assign(&rhs);
    }
}

impl<const N: usize> BitXorAssign<&SegBitSet<N>> for SegBitSet<N> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &SegBitSet<N>) {
        self.xor_assign(rhs);
    }
}

impl<const N: usize> BitXorAssign for SegBitSet<N> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.xor_assign(&rhs);
    }
}

impl<const N: usize> BitAnd for SegBitSet<N> {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.and_assign(&rhs);
        self
    }
}

impl<const N: usize> BitAnd for &SegBitSet<N> {
    type Output = SegBitSet<N>;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.and_assign(rhs);
        result
    }
}

impl<const N: usize> BitOr for SegBitSet<N> {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.or_assign(&rhs);
        self
    }
}

impl<const N: usize> BitOr for &SegBitSet<N> {
    type Output = SegBitSet<N>;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.or_assign(rhs);
        result
    }
}

impl<const N: usize> BitXor for SegBitSet<N> {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self.xor_assign(&rhs);
        self
    }
}

impl<const N: usize> BitXor for &SegBitSet<N> {
    type Output = SegBitSet<N>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.xor_assign(rhs);
        result
    }
}

impl<const N: usize> Not for SegBitSet<N> {
    type Output = Self;

    /// Complement of every bit. O(N).
    #[inline]
    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

impl<const N: usize> Not for &SegBitSet<N> {
    type Output = SegBitSet<N>;

    fn not(self) -> Self::Output {
        let mut result = self.clone();
        result.flip_all();
        result
    }
}
