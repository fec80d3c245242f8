//! Conversions between checked integers, machine integers, and bit-vectors.

use crate::bits::{Bits, MAX_WIDTH};
use crate::error::{FixError, FixResult};
use crate::int::{Int, MachInt};
use crate::word::mask;

/// Width of the two's-complement representation of an [`Int`].
pub const INT_BITS: u32 = i128::BITS;

impl Bits {
    /// The low `len` bits of the two's-complement representation of `value`.
    pub fn from_int(value: Int, len: u32) -> Bits {
        Bits::new(value.value() as u64, len)
    }
}

impl Int {
    /// Widens a machine integer. Always succeeds.
    pub fn from_mach(value: MachInt) -> Int {
        Int::from(value)
    }

    /// Narrows to a machine integer, failing if the value does not fit.
    pub fn to_mach(self) -> FixResult<MachInt> {
        MachInt::try_from(self.value()).map_err(|_| FixError::PrecisionLoss {
            value: self.value(),
        })
    }

    /// Narrows to a bit index or length.
    pub fn to_index(self) -> FixResult<u32> {
        u32::try_from(self.value()).map_err(|_| FixError::IndexOutOfRange {
            value: self.value(),
        })
    }
}

/// Extracts `len` bits of `n`'s two's-complement representation, starting
/// at bit `start`.
///
/// Bits above the integer's width read as copies of its sign, so slicing a
/// negative integer beyond bit 127 yields ones.
///
/// ```
/// use fixbits_core::{get_slice_int, Int};
///
/// let v = get_slice_int(8, Int::new(0b0110_1001_0000), 4);
/// assert_eq!(v.bits(), 0b0110_1001);
/// ```
///
/// # Panics
///
/// Panics if `len` exceeds [`MAX_WIDTH`].
pub fn get_slice_int(len: u32, n: Int, start: u32) -> Bits {
    assert!(
        len <= MAX_WIDTH,
        "bit-vector length {len} exceeds {MAX_WIDTH} bits"
    );
    let shifted = n.value() >> start.min(INT_BITS - 1);
    Bits::new(shifted as u64, len)
}

/// Returns `n` with bits `[start, start + len)` replaced by `slice`.
///
/// Fails if `slice` is not `len` bits long, or if the range extends past the
/// integer's width.
pub fn set_slice_int(len: u32, n: Int, start: u32, slice: Bits) -> FixResult<Int> {
    if slice.len() != len {
        return Err(FixError::SliceLengthMismatch {
            expected: len,
            actual: slice.len(),
        });
    }
    if u64::from(start) + u64::from(len) > u64::from(INT_BITS) {
        return Err(FixError::SliceOutOfRange {
            start,
            len,
            width: INT_BITS,
        });
    }
    if len == 0 {
        return Ok(n);
    }
    let field = u128::from(mask(len)) << start;
    let value = n.value() as u128;
    let inserted = (value & !field) | ((u128::from(slice.bits()) << start) & field);
    Ok(Int::new(inserted as i128))
}
