//! Flat reference model shared by the integration tests

#![allow(dead_code)]

use segbitset::SegBitSet;

/// One mutation applied to both the bitset and the reference.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Set(usize, bool),
    Reset(usize),
    Flip(usize),
    ResetAll,
    FlipAll,
    SetAll,
}

/// Plain `Vec<bool>` mirror of a bitset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub bits: Vec<bool>,
}

impl Reference {
    pub fn new(size: usize) -> Self {
        Self {
            bits: vec![false; size],
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Apply `op`; returns false when the position is out of range.
    pub fn apply(&mut self, op: Op) -> bool {
        let size = self.bits.len();
        match op {
            Op::Set(pos, value) if pos < size => self.bits[pos] = value,
            Op::Reset(pos) if pos < size => self.bits[pos] = false,
            Op::Flip(pos) if pos < size => self.bits[pos] = !self.bits[pos],
            Op::Set(..) | Op::Reset(_) | Op::Flip(_) => return false,
            Op::ResetAll => self.bits.iter_mut().for_each(|b| *b = false),
            Op::FlipAll => self.bits.iter_mut().for_each(|b| *b = !*b),
            Op::SetAll => self.bits.iter_mut().for_each(|b| *b = true),
        }
        true
    }

    pub fn ones(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(pos, &bit)| bit.then_some(pos))
            .collect()
    }
}

/// Apply `op` to the bitset; returns false when it was rejected.
pub fn apply<const N: usize>(bits: &mut SegBitSet<N>, op: Op) -> bool {
    match op {
        Op::Set(pos, value) => bits.set(pos, value).is_ok(),
        Op::Reset(pos) => bits.reset(pos).is_ok(),
        Op::Flip(pos) => bits.flip(pos).is_ok(),
        Op::ResetAll => {
            bits.reset_all();
            true
        }
        Op::FlipAll => {
            bits.flip_all();
            true
        }
        Op::SetAll => {
            bits.set_all();
            true
        }
    }
}

/// Build a bitset holding exactly the reference's bits.
pub fn bitset_of<const N: usize>(reference: &Reference) -> SegBitSet<N> {
    SegBitSet::try_from_positions(reference.ones()).expect("reference fits the bitset")
}

/// Positions produced by chaining `first`/`next`.
pub fn chained_ones<const N: usize>(bits: &SegBitSet<N>) -> Vec<usize> {
    let mut ones = Vec::new();
    let mut cursor = bits.first();
    while let Some(pos) = cursor {
        ones.push(pos);
        cursor = bits.next(pos);
    }
    ones
}

/// Positions produced by `for_each`.
pub fn visited_ones<const N: usize>(bits: &SegBitSet<N>) -> Vec<usize> {
    let mut ones = Vec::new();
    bits.for_each(|pos| ones.push(pos));
    ones
}
