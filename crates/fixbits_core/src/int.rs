//! Checked signed integers that fail instead of wrapping.

use crate::error::{FixError, FixResult};
use std::fmt;

/// A narrower signed integer used for machine-level indices and counts.
pub type MachInt = i64;

/// A signed integer treated as exact by the rest of the runtime.
///
/// Backed by `i128`, so every signed or unsigned reading of a 64-bit
/// vector fits. Arithmetic that would leave `[Int::MIN, Int::MAX]` returns
/// an error; it never wraps. Overflow is detected from the operands before
/// the operation runs, since the backing type has the same width as the
/// checked range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Int(i128);

impl Int {
    /// The smallest representable value.
    pub const MIN: Int = Int(i128::MIN);
    /// The largest representable value.
    pub const MAX: Int = Int(i128::MAX);
    /// Zero.
    pub const ZERO: Int = Int(0);
    /// One.
    pub const ONE: Int = Int(1);

    /// Wraps a raw value.
    pub const fn new(value: i128) -> Self {
        Int(value)
    }

    /// Returns the raw value.
    pub const fn value(self) -> i128 {
        self.0
    }

    /// Returns `true` if the value is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds two integers.
    pub fn add(self, rhs: Int) -> FixResult<Int> {
        let (a, b) = (self.0, rhs.0);
        if b > 0 && a > i128::MAX - b {
            Err(FixError::Overflow { op: "addition" })
        } else if b < 0 && a < i128::MIN - b {
            Err(FixError::Underflow { op: "addition" })
        } else {
            Ok(Int(a + b))
        }
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(self, rhs: Int) -> FixResult<Int> {
        let (a, b) = (self.0, rhs.0);
        if b < 0 && a > i128::MAX + b {
            Err(FixError::Overflow { op: "subtraction" })
        } else if b > 0 && a < i128::MIN + b {
            Err(FixError::Underflow { op: "subtraction" })
        } else {
            Ok(Int(a - b))
        }
    }

    /// Subtracts, clamping negative results to zero.
    pub fn sub_nat(self, rhs: Int) -> FixResult<Int> {
        let diff = self.sub(rhs)?;
        Ok(if diff.is_negative() { Int::ZERO } else { diff })
    }

    /// Multiplies two integers.
    ///
    /// The magnitude bound is checked against `limit / |rhs|` before the
    /// product is formed.
    pub fn mul(self, rhs: Int) -> FixResult<Int> {
        let (a, b) = (self.0, rhs.0);
        if a == 0 || b == 0 {
            return Ok(Int::ZERO);
        }
        let negative = (a < 0) != (b < 0);
        let (ua, ub) = (a.unsigned_abs(), b.unsigned_abs());
        let limit = if negative {
            i128::MIN.unsigned_abs()
        } else {
            i128::MAX as u128
        };
        if ua > limit / ub {
            return Err(if negative {
                FixError::Underflow {
                    op: "multiplication",
                }
            } else {
                FixError::Overflow {
                    op: "multiplication",
                }
            });
        }
        let magnitude = ua * ub;
        Ok(Int(if negative {
            (magnitude as i128).wrapping_neg()
        } else {
            magnitude as i128
        }))
    }

    /// Negates the value. Fails for [`Int::MIN`].
    pub fn neg(self) -> FixResult<Int> {
        if self.0 == i128::MIN {
            Err(FixError::NegationOverflow)
        } else {
            Ok(Int(-self.0))
        }
    }

    /// Absolute value. Fails for [`Int::MIN`].
    pub fn abs(self) -> FixResult<Int> {
        if self.is_negative() {
            self.neg()
        } else {
            Ok(self)
        }
    }

    /// The smaller of two values.
    pub fn min(self, rhs: Int) -> Int {
        if self > rhs {
            rhs
        } else {
            self
        }
    }

    /// The larger of two values.
    pub fn max(self, rhs: Int) -> Int {
        if self < rhs {
            rhs
        } else {
            self
        }
    }

    /// Division truncating toward zero.
    pub fn tdiv(self, rhs: Int) -> FixResult<Int> {
        nonzero(rhs, "tdiv")?;
        self.0
            .checked_div(rhs.0)
            .map(Int)
            .ok_or(FixError::Overflow { op: "tdiv" })
    }

    /// Remainder of [`tdiv`](Self::tdiv); takes the sign of the dividend.
    pub fn tmod(self, rhs: Int) -> FixResult<Int> {
        nonzero(rhs, "tmod")?;
        // MIN % -1 is mathematically 0; only the intermediate quotient overflows.
        Ok(Int(self.0.checked_rem(rhs.0).unwrap_or(0)))
    }

    /// Division rounding toward negative infinity.
    pub fn fdiv(self, rhs: Int) -> FixResult<Int> {
        let q = self.tdiv(rhs)?;
        let r = self.tmod(rhs)?;
        if r.0 != 0 && (r.0 < 0) != (rhs.0 < 0) {
            Ok(Int(q.0 - 1))
        } else {
            Ok(q)
        }
    }

    /// Remainder of [`fdiv`](Self::fdiv); takes the sign of the divisor.
    pub fn fmod(self, rhs: Int) -> FixResult<Int> {
        let r = self.tmod(rhs)?;
        if r.0 != 0 && (r.0 < 0) != (rhs.0 < 0) {
            Ok(Int(r.0 + rhs.0))
        } else {
            Ok(r)
        }
    }

    /// Euclidean division: the matching remainder is never negative.
    pub fn ediv(self, rhs: Int) -> FixResult<Int> {
        nonzero(rhs, "ediv")?;
        self.0
            .checked_div_euclid(rhs.0)
            .map(Int)
            .ok_or(FixError::Overflow { op: "ediv" })
    }

    /// Remainder of [`ediv`](Self::ediv), in `[0, |rhs|)`.
    pub fn emod(self, rhs: Int) -> FixResult<Int> {
        nonzero(rhs, "emod")?;
        Ok(Int(self.0.checked_rem_euclid(rhs.0).unwrap_or(0)))
    }

    /// Raises `self` to a non-negative power by repeated squaring.
    pub fn pow(self, exp: Int) -> FixResult<Int> {
        if exp.is_negative() {
            return Err(FixError::NegativeExponent);
        }
        let mut base = self;
        let mut exp = exp.0;
        let mut result = Int::ONE;
        loop {
            if exp & 1 == 1 {
                result = result.mul(base)?;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = base.mul(base)?;
        }
        Ok(result)
    }

    /// Two raised to `exp`.
    pub fn pow2(exp: Int) -> FixResult<Int> {
        Int(2).pow(exp)
    }

    /// Left shift. Fails if any significant bit would be shifted out.
    pub fn shl(self, amount: Int) -> FixResult<Int> {
        if amount.is_negative() {
            return Err(FixError::InvalidShift { amount: amount.0 });
        }
        if self.0 == 0 {
            return Ok(self);
        }
        let overflow = if self.is_negative() {
            FixError::Underflow { op: "left shift" }
        } else {
            FixError::Overflow { op: "left shift" }
        };
        if amount.0 >= 128 {
            return Err(overflow);
        }
        let shifted = self.0 << amount.0;
        if shifted >> amount.0 != self.0 {
            return Err(overflow);
        }
        Ok(Int(shifted))
    }

    /// Arithmetic right shift (rounds toward negative infinity).
    pub fn shr(self, amount: Int) -> FixResult<Int> {
        if amount.is_negative() {
            return Err(FixError::InvalidShift { amount: amount.0 });
        }
        Ok(Int(self.0 >> amount.0.min(127)))
    }
}

fn nonzero(divisor: Int, op: &'static str) -> FixResult<()> {
    if divisor.0 == 0 {
        Err(FixError::DivisionByZero { op })
    } else {
        Ok(())
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int(i128::from(value))
    }
}

impl From<i32> for Int {
    fn from(value: i32) -> Self {
        Int(i128::from(value))
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Int(i128::from(value))
    }
}

impl From<u32> for Int {
    fn from(value: u32) -> Self {
        Int(i128::from(value))
    }
}

impl From<Int> for i128 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
