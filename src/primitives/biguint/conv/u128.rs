//! Conversions between `BigUint` and `u128`.

use crate::primitives::BigUint;

/// Splits the value into two limbs, low half first.
impl From<u128> for BigUint {
    fn from(value: u128) -> Self {
        BigUint::from_limbs(vec![value as u64, (value >> 64) as u64])
    }
}

/// Attempts to convert a `BigUint` into a `u128`.
///
/// The conversion succeeds only if the value has at most two significant
/// limbs.
impl TryFrom<&BigUint> for u128 {
    type Error = ();

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.significant() {
            [low] => Ok(u128::from(*low)),
            [low, high] => Ok((u128::from(*high) << 64) | u128::from(*low)),
            _ => Err(()),
        }
    }
}
