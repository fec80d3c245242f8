//! The fixed-width bit-vector container and its algebra.

use crate::error::FixError;
use crate::int::Int;
use crate::word::{self, bzhi, mask, WORD_BITS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Sub};

/// The widest bit-vector the container can hold.
pub const MAX_WIDTH: u32 = WORD_BITS;

/// A bit-vector of up to [`MAX_WIDTH`] bits.
///
/// The pattern lives in the low `len` bits of a `u64`; bit 0 is the least
/// significant bit. Bits at index `len` and above are never observable:
/// constructors clear them and every accessor masks again before reading.
///
/// Equality and hashing compare the masked patterns only. Two vectors of
/// different lengths holding the same value compare equal, so callers must
/// keep widths consistent themselves.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBits", into = "RawBits")]
pub struct Bits {
    len: u32,
    bits: u64,
}

impl Bits {
    /// Creates a bit-vector from the low `len` bits of `bits`.
    ///
    /// # Panics
    ///
    /// Panics if `len > MAX_WIDTH`.
    pub fn new(bits: u64, len: u32) -> Self {
        assert!(
            len <= MAX_WIDTH,
            "bit-vector length {len} exceeds {MAX_WIDTH} bits"
        );
        Self {
            len,
            bits: bzhi(bits, len),
        }
    }

    /// Creates an all-zero vector of the given length.
    pub fn zeros(len: u32) -> Self {
        Self::new(0, len)
    }

    /// Creates an all-one vector of the given length.
    pub fn ones(len: u32) -> Self {
        Self::new(u64::MAX, len)
    }

    /// Creates a single-bit vector.
    pub fn from_bool(value: bool) -> Self {
        Self::new(u64::from(value), 1)
    }

    /// Returns the length in bits.
    pub fn len(self) -> u32 {
        self.len
    }

    /// Returns `true` for the zero-width vector.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns the masked pattern.
    pub fn bits(self) -> u64 {
        bzhi(self.bits, self.len)
    }

    /// Returns `true` if every bit is zero.
    pub fn is_zero(self) -> bool {
        self.bits() == 0
    }

    /// Reads bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn bit(self, index: u32) -> bool {
        assert!(
            index < self.len,
            "index {index} out of bounds for width {}",
            self.len
        );
        (self.bits() >> index) & 1 == 1
    }

    /// Returns a copy with bit `index` set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn update_bit(self, index: u32, value: bool) -> Self {
        assert!(
            index < self.len,
            "index {index} out of bounds for width {}",
            self.len
        );
        let bit = 1u64 << index;
        let bits = if value {
            self.bits() | bit
        } else {
            self.bits() & !bit
        };
        Self::new(bits, self.len)
    }

    /// Reads the top bit, or `false` for the zero-width vector.
    pub fn sign_bit(self) -> bool {
        self.len != 0 && self.bit(self.len - 1)
    }

    /// The pattern read as a non-negative integer.
    pub fn unsigned(self) -> Int {
        Int::from(self.bits())
    }

    /// The pattern read as a two's-complement integer of `len` bits.
    ///
    /// When the top bit is set the value is `unsigned - 2^len`. The
    /// zero-width vector reads as 0.
    pub fn signed(self) -> Int {
        word::fast_signed(self.bits, self.len)
    }

    /// Adds an integer to the pattern modulo `2^len`.
    pub fn add_int(self, rhs: Int) -> Self {
        // Truncating to the low word keeps the value modulo 2^64, which
        // agrees with the value modulo 2^len for any len <= 64.
        let rhs = rhs.value() as u64;
        Self::new(self.bits().wrapping_add(rhs), self.len)
    }

    /// Subtracts an integer from the pattern modulo `2^len`.
    pub fn sub_int(self, rhs: Int) -> Self {
        let rhs = rhs.value() as u64;
        Self::new(self.bits().wrapping_sub(rhs), self.len)
    }

    fn assert_same_width(self, rhs: Self, op: &str) {
        assert_eq!(self.len, rhs.len, "Bits width mismatch in {op}");
    }
}

impl PartialEq for Bits {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Bits {}

impl Hash for Bits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits<{}>({self})", self.len)
    }
}

impl BitAnd for Bits {
    type Output = Bits;

    fn bitand(self, rhs: Self) -> Bits {
        self.assert_same_width(rhs, "AND");
        Bits::new(self.bits & rhs.bits, self.len)
    }
}

impl BitOr for Bits {
    type Output = Bits;

    fn bitor(self, rhs: Self) -> Bits {
        self.assert_same_width(rhs, "OR");
        Bits::new(self.bits | rhs.bits, self.len)
    }
}

impl BitXor for Bits {
    type Output = Bits;

    fn bitxor(self, rhs: Self) -> Bits {
        self.assert_same_width(rhs, "XOR");
        Bits::new(self.bits ^ rhs.bits, self.len)
    }
}

impl Not for Bits {
    type Output = Bits;

    fn not(self) -> Bits {
        Bits::new(!self.bits & mask(self.len), self.len)
    }
}

/// Addition modulo `2^len`.
impl Add for Bits {
    type Output = Bits;

    fn add(self, rhs: Self) -> Bits {
        self.assert_same_width(rhs, "ADD");
        Bits::new(self.bits.wrapping_add(rhs.bits), self.len)
    }
}

/// Subtraction modulo `2^len`.
impl Sub for Bits {
    type Output = Bits;

    fn sub(self, rhs: Self) -> Bits {
        self.assert_same_width(rhs, "SUB");
        Bits::new(self.bits.wrapping_sub(rhs.bits), self.len)
    }
}

/// Serialized form of [`Bits`]; validated on the way back in.
#[derive(Serialize, Deserialize)]
struct RawBits {
    len: u32,
    bits: u64,
}

impl From<Bits> for RawBits {
    fn from(value: Bits) -> Self {
        RawBits {
            len: value.len,
            bits: value.bits(),
        }
    }
}

impl TryFrom<RawBits> for Bits {
    type Error = FixError;

    fn try_from(raw: RawBits) -> Result<Self, Self::Error> {
        if raw.len > MAX_WIDTH {
            return Err(FixError::WidthTooLarge {
                len: raw.len,
                max: MAX_WIDTH,
            });
        }
        Ok(Bits::new(raw.bits, raw.len))
    }
}
