//! Conversions between `BigUint` and integers of at most 64 bits.

use crate::primitives::BigUint;

/// Stores the value as a single limb.
impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        BigUint { limbs: vec![value] }
    }
}

macro_rules! from_narrow {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUint {
            fn from(value: $t) -> Self {
                BigUint::from(value as u64)
            }
        }
    )*};
}

from_narrow!(u8, u16, u32, usize);

/// Attempts to convert a `BigUint` into a `u64`.
///
/// The conversion succeeds only if every limb above the first is zero.
impl TryFrom<&BigUint> for u64 {
    type Error = ();

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.significant() {
            [low] => Ok(*low),
            _ => Err(()),
        }
    }
}

/// Limbs of the normalized value, least significant first.
impl From<BigUint> for Vec<u64> {
    fn from(value: BigUint) -> Self {
        value.normalized().limbs
    }
}
