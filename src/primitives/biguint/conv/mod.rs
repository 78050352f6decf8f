//! Conversions between `BigUint` and native unsigned integers.
//!
//! Widening conversions are infallible. Narrowing conversions succeed only
//! when the value fits, and report `()` otherwise.
//!
//! Split by native width.

mod u128;
mod u64;
