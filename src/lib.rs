//! Arbitrary-precision unsigned integers over 64-bit limbs
//!
//! This crate provides a single value type, `BigUint`, together with the
//! bitwise, additive, shift and comparison operations over it, and a
//! canonical hexadecimal text form.
//!
//! The focus is on **clarity and predictable semantics**, not on breadth.
//! There is no multiplication, division or signed representation, and no
//! attempt at constant-time execution.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `BigUint` type and its error type. Values are immutable from the
//!   caller's point of view: every operation borrows its operands and
//!   returns a freshly allocated result.
//!
//! # Representation
//!
//! A `BigUint` is a vector of `u64` limbs stored least-significant first.
//! Results of arithmetic and bitwise operations are normalized: the most
//! significant stored limb is non-zero unless the value is zero, in which
//! case exactly one zero limb remains. Bitwise NOT is the one exception and
//! keeps the operand's width, see [`primitives::BigUint::not_limbs`].
//!
//! # Features
//!
//! - `serde`: (de)serialize `BigUint` as its canonical hex string.
//!
//! # Example
//!
//! ```rust
//! use biglimb::primitives::BigUint;
//!
//! let a = BigUint::parse_hex("ffffffffffffffff").unwrap();
//! let b = &a + &BigUint::one();
//!
//! assert_eq!(b.to_hex(), "10000000000000000");
//! assert_eq!((&b >> 64).to_hex(), "1");
//! ```

pub mod primitives;
