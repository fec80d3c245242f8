//! Textual rendering and parsing of bit-vectors and integers.

use crate::bits::{Bits, MAX_WIDTH};
use crate::int::Int;
use std::fmt;
use std::io;

/// Renders as `0x` plus zero-padded uppercase hex when the length is a
/// multiple of four, otherwise as `0b` plus every bit, MSB first.
///
/// The value is always shown unsigned.
impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() % 4 == 0 {
            let digits = (self.len() / 4) as usize;
            write!(f, "0x{:0digits$X}", self.bits())
        } else {
            write!(f, "0b")?;
            for i in (0..self.len()).rev() {
                write!(f, "{}", u8::from(self.bit(i)))?;
            }
            Ok(())
        }
    }
}

impl Bits {
    /// The unsigned value as a decimal string.
    pub fn decimal_string(self) -> String {
        self.bits().to_string()
    }

    /// Parses a string of `0`/`1` digits, MSB first. Underscores are ignored.
    ///
    /// The length is the number of digits. Returns `None` for invalid
    /// characters or more than [`MAX_WIDTH`] digits.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let mut bits = 0u64;
        let mut len = 0u32;
        for c in s.chars().filter(|&c| c != '_') {
            let digit = c.to_digit(2)?;
            if len == MAX_WIDTH {
                return None;
            }
            bits = (bits << 1) | u64::from(digit);
            len += 1;
        }
        Some(Bits::new(bits, len))
    }

    /// Parses hex digits, four bits per digit. Underscores are ignored.
    ///
    /// Returns `None` for invalid characters or more than 16 digits.
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let mut bits = 0u64;
        let mut len = 0u32;
        for c in s.chars().filter(|&c| c != '_') {
            let digit = c.to_digit(16)?;
            if len == MAX_WIDTH {
                return None;
            }
            bits = (bits << 4) | u64::from(digit);
            len += 4;
        }
        Some(Bits::new(bits, len))
    }

    /// Parses a `0x`-prefixed hex literal into a `len`-bit vector.
    ///
    /// Invalid input (see [`valid_hex_bits`]) yields a zero vector of the
    /// requested width.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`MAX_WIDTH`].
    pub fn parse_hex_bits(len: u32, s: &str) -> Self {
        assert!(
            len <= MAX_WIDTH,
            "bit-vector length {len} exceeds {MAX_WIDTH} bits"
        );
        if !valid_hex_bits(len, s) {
            return Bits::zeros(len);
        }
        let digits = s[2..].trim_start_matches('0');
        let value = if digits.is_empty() {
            0
        } else {
            u64::from_str_radix(digits, 16).unwrap_or(0)
        };
        Bits::new(value, len)
    }
}

/// Returns `true` if `s` is a `0x`-prefixed hex literal whose value fits in
/// `len` bits (leading zeros are not counted).
///
/// Always `false` when `len` exceeds [`MAX_WIDTH`].
pub fn valid_hex_bits(len: u32, s: &str) -> bool {
    if len > MAX_WIDTH {
        return false;
    }
    let Some(hex) = s.strip_prefix("0x") else {
        return false;
    };
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    let significant = hex.trim_start_matches('0');
    let Some(first) = significant.chars().next() else {
        return true;
    };
    let first_width = match first.to_digit(16) {
        Some(d) => 32 - d.leading_zeros(),
        None => return false,
    };
    let width = u64::from(first_width) + 4 * (significant.len() as u64 - 1);
    width <= u64::from(len)
}

/// Signed decimal rendering of an integer.
pub fn dec_str(n: Int) -> String {
    n.to_string()
}

/// `0x`-prefixed lowercase hex; negative values get a leading `-`.
pub fn hex_str(n: Int) -> String {
    let v = n.value();
    if v < 0 {
        format!("-0x{:x}", v.unsigned_abs())
    } else {
        format!("0x{v:x}")
    }
}

/// `0x`-prefixed uppercase hex; negative values get a leading `-`.
pub fn hex_str_upper(n: Int) -> String {
    let v = n.value();
    if v < 0 {
        format!("-0x{:X}", v.unsigned_abs())
    } else {
        format!("0x{v:X}")
    }
}

/// Writes `pre`, the rendering of `op`, then `post`.
pub fn write_bits<W: io::Write>(w: &mut W, pre: &str, op: Bits, post: &str) -> io::Result<()> {
    write!(w, "{pre}{op}{post}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hex_when_nibble_aligned() {
        assert_eq!(Bits::new(0x69, 8).to_string(), "0x69");
        assert_eq!(Bits::new(0xA, 16).to_string(), "0x000A");
        assert_eq!(Bits::ones(64).to_string(), "0xFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn display_binary_otherwise() {
        assert_eq!(Bits::new(0b101, 3).to_string(), "0b101");
        assert_eq!(Bits::new(0b1, 5).to_string(), "0b00001");
        assert_eq!(Bits::from_bool(true).to_string(), "0b1");
    }

    #[test]
    fn display_never_signed() {
        assert_eq!(Bits::new(0x80, 8).to_string(), "0x80");
    }

    #[test]
    fn display_zero_width() {
        assert_eq!(Bits::zeros(0).to_string(), "0x0");
    }

    #[test]
    fn decimal_is_unsigned() {
        assert_eq!(Bits::new(0xFF, 8).decimal_string(), "255");
        assert_eq!(Bits::ones(64).decimal_string(), "18446744073709551615");
    }

    #[test]
    fn parse_binary() {
        let v = Bits::from_binary_str("1011_0101").unwrap();
        assert_eq!(v.len(), 8);
        assert_eq!(v.bits(), 0xB5);
        assert_eq!(Bits::from_binary_str("").unwrap().len(), 0);
        assert!(Bits::from_binary_str("102").is_none());
        assert!(Bits::from_binary_str(&"1".repeat(65)).is_none());
        assert_eq!(Bits::from_binary_str(&"1".repeat(64)), Some(Bits::ones(64)));
    }

    #[test]
    fn parse_hex() {
        let v = Bits::from_hex_str("A5").unwrap();
        assert_eq!(v.len(), 8);
        assert_eq!(v.to_string(), "0xA5");
        assert!(Bits::from_hex_str("GG").is_none());
        assert!(Bits::from_hex_str(&"F".repeat(17)).is_none());
    }

    #[test]
    fn valid_hex_bits_width_check() {
        assert!(valid_hex_bits(8, "0xFF"));
        assert!(!valid_hex_bits(7, "0xFF"));
        assert!(valid_hex_bits(5, "0x1F"));
        assert!(valid_hex_bits(1, "0x0001"));
        assert!(valid_hex_bits(4, "0x000"));
        assert!(!valid_hex_bits(8, "FF"));
        assert!(!valid_hex_bits(8, "0x"));
        assert!(!valid_hex_bits(8, "0xZZ"));
    }

    #[test]
    fn valid_hex_bits_rejects_oversized_width() {
        assert!(!valid_hex_bits(65, "0x0"));
        assert!(!valid_hex_bits(65, "0x1"));
        assert!(valid_hex_bits(64, "0x0"));
        assert!(valid_hex_bits(64, "0xFFFFFFFFFFFFFFFF"));
    }

    #[test]
    #[should_panic(expected = "bit-vector length 65 exceeds 64 bits")]
    fn parse_hex_bits_panics_on_oversized_width() {
        Bits::parse_hex_bits(65, "0x0");
    }

    #[test]
    fn parse_hex_bits_falls_back_to_zero() {
        assert_eq!(Bits::parse_hex_bits(12, "0x0AB").bits(), 0xAB);
        assert_eq!(Bits::parse_hex_bits(12, "0x0AB").len(), 12);
        let bad = Bits::parse_hex_bits(4, "0xFF");
        assert_eq!(bad.len(), 4);
        assert!(bad.is_zero());
    }

    #[test]
    fn integer_strings() {
        assert_eq!(dec_str(Int::new(-12)), "-12");
        assert_eq!(hex_str(Int::new(255)), "0xff");
        assert_eq!(hex_str(Int::new(-255)), "-0xff");
        assert_eq!(hex_str_upper(Int::new(0xabc)), "0xABC");
    }

    #[test]
    fn write_bits_to_buffer() {
        let mut out = Vec::new();
        write_bits(&mut out, "x = ", Bits::new(0b11, 3), "\n").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x = 0b011\n");
    }
}
