//! Arbitrary-precision unsigned integer representation
//!
//! This module defines `BigUint`, an unsigned integer stored as a vector of
//! 64-bit limbs in **little-endian limb order** (index 0 holds the least
//! significant 64 bits).
//!
//! The vector is never empty. Operations return *normalized* values whose
//! most significant limb is non-zero, or a single zero limb for the value
//! zero. Bitwise NOT keeps its operand's width and may therefore return a
//! value with high-order zero limbs; equality, ordering and hashing only look
//! at the significant limbs so such a value still behaves like its number.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::LIMB_BITS;

/// Arbitrary-precision unsigned integer.
///
/// Every operation borrows its operands and allocates a new result, so a
/// `BigUint` can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct BigUint {
    pub(crate) limbs: Vec<u64>,
}

impl BigUint {
    /// The value zero, stored as a single zero limb.
    pub fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Returns the value with every bit set across `width` limbs.
    ///
    /// A width of zero is treated as one limb.
    pub fn ones(width: usize) -> Self {
        Self {
            limbs: vec![u64::MAX; width.max(1)],
        }
    }

    /// Builds a value from little-endian limbs and normalizes it.
    ///
    /// An empty vector yields zero.
    pub fn from_limbs(limbs: Vec<u64>) -> Self {
        Self::from_raw(limbs).normalized()
    }

    /// Wraps limbs without trimming high-order zeros.
    pub(crate) fn from_raw(mut limbs: Vec<u64>) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }

        Self { limbs }
    }

    /// Drops high-order zero limbs from a freshly computed result.
    pub(crate) fn normalized(mut self) -> Self {
        let len = significant_len(&self.limbs).max(1);
        self.limbs.truncate(len);
        self
    }

    /// Returns the stored limbs, least significant first.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Number of stored limbs.
    ///
    /// This equals the number of significant limbs for every normalized
    /// value. Results of NOT may report more.
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Returns `true` if the most significant stored limb is non-zero, or
    /// the value is a single zero limb.
    pub fn is_normalized(&self) -> bool {
        self.limbs.len() == 1 || self.limbs.last().is_some_and(|&top| top != 0)
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Number of bits needed to represent the value.
    ///
    /// # Returns
    /// The index of the highest set bit plus one, or `0` for zero.
    pub fn bits(&self) -> usize {
        let limbs = self.significant();

        match limbs.last() {
            Some(&top) if top != 0 => {
                (limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
            }
            _ => 0,
        }
    }

    /// The stored limbs without high-order zero limbs.
    ///
    /// Always holds at least one limb.
    pub(crate) fn significant(&self) -> &[u64] {
        &self.limbs[..significant_len(&self.limbs).max(1)]
    }
}

/// Number of limbs up to and including the highest non-zero one.
fn significant_len(limbs: &[u64]) -> usize {
    limbs
        .iter()
        .rposition(|&limb| limb != 0)
        .map_or(0, |top| top + 1)
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for BigUint {}

impl Ord for BigUint {
    /// Compares by value.
    ///
    /// The longer significant limb run is larger; equal lengths are decided by
    /// the first differing limb scanning from the most significant end.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.significant();
        let rhs = other.significant();

        lhs.len()
            .cmp(&rhs.len())
            .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}
