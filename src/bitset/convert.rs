//! Conversions, copying and equality

use std::fmt;
use std::ops::Index;

use bitvec::prelude::*;
use tracing::debug;

use super::SegBitSet;
use crate::tree::AggregateTree;
use crate::{Result, SegBitSetError};

impl<const N: usize> SegBitSet<N> {
    /// Build from a flat bit vector of exactly `N` bits
    ///
    /// Time: O(N), aggregates computed bottom-up in the same pass
    pub fn from_flat(bits: &BitSlice) -> Result<Self> {
        if bits.len() != N {
            return Err(SegBitSetError::LengthMismatch {
                expected: N,
                actual: bits.len(),
            });
        }
        debug!(size = N, "building bitset from flat bits");
        Ok(Self {
            tree: AggregateTree::build(bits, N),
        })
    }

    /// Build from a list of set positions
    ///
    /// Fails on the first position `>= N`.
    pub fn try_from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bits = Self::new();
        for pos in positions {
            bits.insert(pos)?;
        }
        Ok(bits)
    }

    /// Export as a flat bit vector of `N` bits
    pub fn to_flat(&self) -> BitVec {
        self.tree.to_flat()
    }

    /// Export as a bool array
    pub fn to_array(&self) -> [bool; N] {
        let mut out = [false; N];
        self.for_each(|pos| out[pos] = true);
        out
    }
}

impl<const N: usize> From<[bool; N]> for SegBitSet<N> {
    fn from(values: [bool; N]) -> Self {
        let flat: BitVec = values.iter().copied().collect();
        Self {
            tree: AggregateTree::build(&flat, N),
        }
    }
}

impl<const N: usize> TryFrom<&BitSlice> for SegBitSet<N> {
    type Error = SegBitSetError;

    fn try_from(bits: &BitSlice) -> Result<Self> {
        Self::from_flat(bits)
    }
}

impl<const N: usize> From<&SegBitSet<N>> for BitVec {
    fn from(bits: &SegBitSet<N>) -> BitVec {
        bits.to_flat()
    }
}

impl<const N: usize> FromIterator<usize> for SegBitSet<N> {
    /// Collect set positions; panics on a position `>= N`
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

impl<const N: usize> Extend<usize> for SegBitSet<N> {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for pos in iter {
            if let Err(err) = self.insert(pos) {
                panic!("{}", err);
            }
        }
    }
}

impl<const N: usize> Clone for SegBitSet<N> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    /// Reuses the existing tree and only walks subtrees live on either side
    fn clone_from(&mut self, source: &Self) {
        self.tree.copy_from(&source.tree);
    }
}

impl<const N: usize> PartialEq for SegBitSet<N> {
    /// Lockstep descent; subtrees empty on both sides compare equal
    /// without visiting their leaves.
    fn eq(&self, other: &Self) -> bool {
        self.tree.same_leaves(&other.tree)
    }
}

impl<const N: usize> Eq for SegBitSet<N> {}

impl<const N: usize> Index<usize> for SegBitSet<N> {
    type Output = bool;

    /// Read the bit at `pos`; panics if `pos >= N`
    fn index(&self, pos: usize) -> &bool {
        match self.test(pos) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<const N: usize> fmt::Debug for SegBitSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegBitSet")
            .field("size", &N)
            .field("count", &self.count())
            .field("ones", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
