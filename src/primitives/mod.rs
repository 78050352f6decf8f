//! Primitive types
//!
//! This module defines the value types exposed by the crate.
//!
//! Current primitives include:
//! - `BigUint`: an arbitrary-precision unsigned integer backed by 64-bit limbs
//!
//! Errors produced while parsing or subtracting are reported through
//! `BigUintError`.

mod biguint;

/// Arbitrary-precision unsigned integer and its error type.
pub use biguint::{BigUint, BigUintError, Result};
