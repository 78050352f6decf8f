//! Bitwise, additive and shift operations for `BigUint`
//!
//! Each operation is implemented once on borrowed operands and exposed
//! through the standard operator traits for both `&BigUint` and `BigUint`.
//! Subtraction is the exception: it can fail, so it is only available as
//! [`BigUint::checked_sub`].
//!
//! All results except NOT are normalized before they are returned.

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr};

use tracing::debug;

use super::{BigUint, BigUintError, LIMB_BITS, Result};

impl BigUint {
    /// Complements every stored limb.
    ///
    /// The result has the same limb count as `self` and is **not**
    /// normalized, so `!!x` reproduces the stored limbs of `x` exactly. The
    /// complement is relative to the operand's own width: `!x` for a one-limb
    /// value flips 64 bits, whatever the value.
    pub fn not_limbs(&self) -> Self {
        Self::from_raw(self.limbs.iter().map(|limb| !limb).collect())
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// # Errors
    ///
    /// Returns `BigUintError::NegativeResult` if `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        match self.cmp(rhs) {
            Ordering::Less => {
                debug!(
                    minuend_limbs = self.limb_count(),
                    subtrahend_limbs = rhs.limb_count(),
                    "subtraction would go negative"
                );
                Err(BigUintError::NegativeResult)
            }
            Ordering::Equal => Ok(Self::zero()),
            Ordering::Greater => {
                let mut borrow = false;

                // rhs has no significant limbs past self's width here
                let out = self
                    .limbs
                    .iter()
                    .enumerate()
                    .map(|(i, &a)| {
                        let b = rhs.limbs.get(i).copied().unwrap_or(0);
                        let (diff, under1) = a.overflowing_sub(b);
                        let (diff, under2) = diff.overflowing_sub(u64::from(borrow));
                        borrow = under1 || under2;
                        diff
                    })
                    .collect();

                Ok(Self::from_limbs(out))
            }
        }
    }

    fn and_limbs(&self, rhs: &Self) -> Self {
        let out = self
            .limbs
            .iter()
            .zip(rhs.limbs.iter())
            .map(|(a, b)| a & b)
            .collect();

        Self::from_limbs(out)
    }

    fn add_limbs(&self, rhs: &Self) -> Self {
        let (long, short) = longer_first(&self.limbs, &rhs.limbs);

        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = false;

        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let (sum, over1) = a.overflowing_add(b);
            let (sum, over2) = sum.overflowing_add(u64::from(carry));
            out.push(sum);
            carry = over1 || over2;
        }

        out.push(u64::from(carry));

        Self::from_limbs(out)
    }

    fn shl_bits(&self, shift: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let block = shift / LIMB_BITS;
        let residual = (shift % LIMB_BITS) as u32;
        let len = self.limbs.len();

        // one limb of headroom for bits pushed out of the top
        let mut out = vec![0u64; len + block + 1];

        if residual == 0 {
            out[block..block + len].copy_from_slice(&self.limbs);
        } else {
            let mut carry = 0u64;

            for (o, &limb) in out[block..].iter_mut().zip(self.limbs.iter()) {
                *o = (limb << residual) | carry;
                carry = limb >> (u64::BITS - residual);
            }

            out[block + len] = carry;
        }

        Self::from_limbs(out)
    }

    fn shr_bits(&self, shift: usize) -> Self {
        let block = shift / LIMB_BITS;
        let residual = (shift % LIMB_BITS) as u32;

        let Some(kept) = self.limbs.get(block..) else {
            return Self::zero();
        };

        if residual == 0 {
            return Self::from_limbs(kept.to_vec());
        }

        let mut out = vec![0u64; kept.len()];
        let mut incoming = 0u64;

        for (o, &limb) in out.iter_mut().zip(kept.iter()).rev() {
            *o = (limb >> residual) | incoming;
            incoming = limb << (u64::BITS - residual);
        }

        Self::from_limbs(out)
    }
}

/// Orders two limb slices as `(longer, shorter)`.
fn longer_first<'a>(a: &'a [u64], b: &'a [u64]) -> (&'a [u64], &'a [u64]) {
    if a.len() >= b.len() { (a, b) } else { (b, a) }
}

/// Combines two limb slices over the width of the longer one.
///
/// Past the overlap the shorter operand contributes zero bits, so the longer
/// operand's limbs are carried over unchanged starting right at the overlap
/// boundary.
fn combine_longest(a: &[u64], b: &[u64], op: impl Fn(u64, u64) -> u64) -> BigUint {
    let (long, short) = longer_first(a, b);

    let mut out = long.to_vec();
    out.iter_mut()
        .zip(short.iter())
        .for_each(|(o, &s)| *o = op(*o, s));

    BigUint::from_limbs(out)
}

/// Bitwise complement over the operand's own width.
impl Not for &BigUint {
    type Output = BigUint;

    fn not(self) -> Self::Output {
        self.not_limbs()
    }
}

impl Not for BigUint {
    type Output = BigUint;

    fn not(mut self) -> Self::Output {
        self.limbs.iter_mut().for_each(|limb| *limb = !*limb);
        self
    }
}

/// Bitwise AND over the shorter operand's width.
impl BitAnd<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> Self::Output {
        self.and_limbs(rhs)
    }
}

/// Bitwise OR over the longer operand's width.
impl BitOr<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> Self::Output {
        combine_longest(&self.limbs, &rhs.limbs, |a, b| a | b)
    }
}

/// Bitwise XOR over the longer operand's width.
impl BitXor<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> Self::Output {
        combine_longest(&self.limbs, &rhs.limbs, |a, b| a ^ b)
    }
}

/// Unbounded addition; the result grows by at most one limb.
impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> Self::Output {
        self.add_limbs(rhs)
    }
}

/// Logical left shift by any number of bits. No bits are lost.
impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shl_bits(rhs)
    }
}

/// Logical right shift by any number of bits.
///
/// Shifting past the top of the value yields zero.
impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_bits(rhs)
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shl_bits(rhs)
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_bits(rhs)
    }
}

/// Owned and mixed-ownership forms of the binary operators, delegating to
/// the `&BigUint op &BigUint` implementations above.
macro_rules! forward_binop {
    ($($imp:ident $method:ident),* $(,)?) => {$(
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> Self::Output {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> Self::Output {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> Self::Output {
                $imp::$method(self, &rhs)
            }
        }
    )*};
}

forward_binop!(BitAnd bitand, BitOr bitor, BitXor bitxor, Add add);
