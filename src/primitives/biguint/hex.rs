//! Hexadecimal text form for `BigUint`
//!
//! Parsing accepts a bare run of hex digits (no `0x` prefix, no sign, either
//! case). The string is cut into groups of 16 digits from the right, so the
//! rightmost group becomes limb 0 and the leftmost group may be shorter.
//!
//! Formatting is canonical: the most significant limb is printed at minimal
//! width and every lower limb as exactly 16 zero-padded digits, so
//! `parse_hex(to_hex(x)) == x` always holds.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex, Write};
use std::str::FromStr;

use tracing::debug;

use super::{BigUint, BigUintError, HEX_DIGITS_PER_LIMB, Result};

impl BigUint {
    /// Parses a hexadecimal string into a normalized value.
    ///
    /// # Errors
    ///
    /// - `BigUintError::EmptyInput` if `s` is empty
    /// - `BigUintError::MalformedHexInput` if `s` contains a character
    ///   outside `[0-9a-fA-F]`; the least significant offender is reported
    pub fn parse_hex(s: &str) -> Result<Self> {
        if s.is_empty() {
            debug!("rejecting empty hex input");
            return Err(BigUintError::EmptyInput);
        }

        let mut limbs = vec![0u64; s.len().div_ceil(HEX_DIGITS_PER_LIMB)];

        for (position, (index, found)) in s.char_indices().rev().enumerate() {
            let Some(digit) = found.to_digit(16) else {
                debug!(index, ?found, "rejecting malformed hex input");
                return Err(BigUintError::MalformedHexInput { index, found });
            };

            let shift = 4 * (position % HEX_DIGITS_PER_LIMB);
            limbs[position / HEX_DIGITS_PER_LIMB] |= u64::from(digit) << shift;
        }

        Ok(Self::from_limbs(limbs))
    }

    /// Returns the canonical lowercase hex form of the value.
    ///
    /// Zero is rendered as `"0"`.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Writes the digits through `pad_integral`, so `#`, width, fill and `0`
    /// flags behave as they do for native integers.
    fn write_hex(&self, f: &mut Formatter<'_>, upper: bool) -> fmt::Result {
        let limbs = self.significant();
        let mut digits = String::with_capacity(limbs.len() * HEX_DIGITS_PER_LIMB);

        if let Some((top, rest)) = limbs.split_last() {
            if upper {
                write!(digits, "{top:X}")?;
                for limb in rest.iter().rev() {
                    write!(digits, "{limb:016X}")?;
                }
            } else {
                write!(digits, "{top:x}")?;
                for limb in rest.iter().rev() {
                    write!(digits, "{limb:016x}")?;
                }
            }
        } else {
            digits.push('0');
        }

        f.pad_integral(true, "0x", &digits)
    }
}

impl FromStr for BigUint {
    type Err = BigUintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl LowerHex for BigUint {
    /// `{:#x}` prefixes the output with `0x`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false)
    }
}

impl UpperHex for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true)
    }
}

impl Display for BigUint {
    /// Formats the value as canonical lowercase hex, same as `to_hex`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
