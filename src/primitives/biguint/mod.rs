//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines the `BigUint` type, an unsigned integer of unbounded
//! width stored as a little-endian sequence of 64-bit limbs.
//!
//! Submodules:
//! - `core`: representation, normalization, equality and ordering
//! - `hex`: parsing from and formatting to hexadecimal text
//! - `ops`: bitwise, additive and shift operations
//! - `conv`: conversions from and to native unsigned integers
//! - `error`: error type shared by the fallible operations

mod conv;
mod core;
mod error;
mod hex;
mod ops;
#[cfg(feature = "serde")]
mod serialization;

pub use self::core::BigUint;
pub use error::{BigUintError, Result};

/// Width of a single limb in bits.
pub(crate) const LIMB_BITS: usize = u64::BITS as usize;

/// Number of hexadecimal digits encoding one limb.
pub(crate) const HEX_DIGITS_PER_LIMB: usize = LIMB_BITS / 4;
