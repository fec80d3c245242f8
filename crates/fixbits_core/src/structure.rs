//! Structural operations: extension, truncation, slicing, concatenation and shifts.
//!
//! Widths are tracked statically by the generated code that calls these
//! operations, so a width that does not fit is a caller bug and panics
//! rather than returning an error.

use crate::bits::{Bits, MAX_WIDTH};
use crate::error::{FixError, FixResult};
use crate::word::{self, mask, safe_lshift, safe_rshift};

impl Bits {
    /// Widens to `len` bits, filling the new high bits with zero.
    ///
    /// # Panics
    ///
    /// Panics if `len` is smaller than the current length or exceeds [`MAX_WIDTH`].
    pub fn zero_extend(self, len: u32) -> Bits {
        assert!(
            self.len() <= len,
            "cannot zero-extend {} bits to {len} bits",
            self.len()
        );
        Bits::new(self.bits(), len)
    }

    /// Widens to `len` bits, copying the current top bit into the new bits.
    ///
    /// # Panics
    ///
    /// Panics if `len` is smaller than the current length or exceeds [`MAX_WIDTH`].
    pub fn sign_extend(self, len: u32) -> Bits {
        assert!(len <= MAX_WIDTH, "bit-vector length {len} exceeds {MAX_WIDTH} bits");
        Bits::new(word::fast_sign_extend(self.bits(), self.len(), len), len)
    }

    /// Keeps the low `len` bits.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than the current length.
    pub fn truncate(self, len: u32) -> Bits {
        assert!(
            len <= self.len(),
            "cannot truncate {} bits to {len} bits",
            self.len()
        );
        Bits::new(self.bits(), len)
    }

    /// Keeps the high `len` bits.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than the current length.
    pub fn truncate_lsb(self, len: u32) -> Bits {
        assert!(
            len <= self.len(),
            "cannot truncate {} bits to {len} bits",
            self.len()
        );
        Bits::new(safe_rshift(self.bits(), u64::from(self.len() - len)), len)
    }

    /// Extracts bits `n` down to `m` inclusive, giving `n - m + 1` bits.
    ///
    /// # Panics
    ///
    /// Panics unless `m <= n < self.len()`.
    pub fn subrange(self, n: u32, m: u32) -> Bits {
        assert!(
            m <= n && n < self.len(),
            "subrange [{n}:{m}] out of bounds for width {}",
            self.len()
        );
        let len = n - m + 1;
        Bits::new(word::fast_slice(self.bits(), m, len), len)
    }

    /// Extracts `len` bits starting at bit `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len` exceeds the current length.
    pub fn slice(self, start: u32, len: u32) -> Bits {
        assert!(
            u64::from(start) + u64::from(len) <= u64::from(self.len()),
            "slice of {len} bits at {start} out of bounds for width {}",
            self.len()
        );
        Bits::new(word::fast_slice(self.bits(), start, len), len)
    }

    /// Concatenates `self` (high bits) with `lo` (low bits).
    ///
    /// # Panics
    ///
    /// Panics if the combined length exceeds [`MAX_WIDTH`].
    pub fn append(self, lo: Bits) -> Bits {
        let len = self.len() + lo.len();
        assert!(
            len <= MAX_WIDTH,
            "appending {} and {} bits exceeds {MAX_WIDTH} bits",
            self.len(),
            lo.len()
        );
        Bits::new(word::append_raw(self.bits(), lo.bits(), lo.len()), len)
    }

    /// Concatenates `times` copies of `self`.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed [`MAX_WIDTH`].
    pub fn replicate(self, times: u32) -> Bits {
        let total = u64::from(self.len()) * u64::from(times);
        assert!(
            total <= u64::from(MAX_WIDTH),
            "replicating {} bits {times} times exceeds {MAX_WIDTH} bits",
            self.len()
        );
        (0..times).fold(Bits::zeros(0), |acc, _| acc.append(self))
    }

    /// Overwrites bits `n` down to `m` inclusive with `slice`.
    ///
    /// # Panics
    ///
    /// Panics unless `m <= n < self.len()` and `slice` is `n - m + 1` bits.
    pub fn update_subrange(self, n: u32, m: u32, slice: Bits) -> Bits {
        assert!(
            m <= n && n < self.len(),
            "subrange [{n}:{m}] out of bounds for width {}",
            self.len()
        );
        assert_eq!(
            slice.len(),
            n - m + 1,
            "slice width does not match subrange [{n}:{m}]"
        );
        Bits::new(
            word::fast_update_subrange(self.bits(), n, m, slice.bits()),
            self.len(),
        )
    }

    /// Overwrites `slice.len()` bits starting at bit `start`.
    ///
    /// # Panics
    ///
    /// Panics if the slice does not fit inside `self`.
    pub fn set_slice(self, start: u32, slice: Bits) -> Bits {
        if slice.is_empty() {
            return self;
        }
        assert!(
            u64::from(start) + u64::from(slice.len()) <= u64::from(self.len()),
            "slice of {} bits at {start} out of bounds for width {}",
            slice.len(),
            self.len()
        );
        self.update_subrange(start + slice.len() - 1, start, slice)
    }

    /// Logical left shift; bits shifted past the top are dropped.
    pub fn shl(self, amount: u32) -> Bits {
        Bits::new(safe_lshift(self.bits(), u64::from(amount)) & mask(self.len()), self.len())
    }

    /// Logical right shift; zeros enter at the top.
    pub fn shr(self, amount: u32) -> Bits {
        Bits::new(safe_rshift(self.bits(), u64::from(amount)), self.len())
    }

    /// Arithmetic right shift; copies of the top bit enter at the top.
    pub fn arith_shr(self, amount: u32) -> Bits {
        let value = self.signed().value() >> amount.min(127);
        Bits::new(value as u64, self.len())
    }

    /// Logical left shift by the unsigned value of `amount`.
    pub fn shift_bits_left(self, amount: Bits) -> Bits {
        Bits::new(safe_lshift(self.bits(), amount.bits()), self.len())
    }

    /// Logical right shift by the unsigned value of `amount`.
    pub fn shift_bits_right(self, amount: Bits) -> Bits {
        Bits::new(safe_rshift(self.bits(), amount.bits()), self.len())
    }

    /// Arithmetic right shift by the unsigned value of `amount`.
    pub fn shift_bits_right_arith(self, amount: Bits) -> Bits {
        self.arith_shr(u32::try_from(amount.bits()).unwrap_or(u32::MAX))
    }

    /// Reverses the byte order.
    ///
    /// Only defined for lengths that are a whole number of bytes.
    pub fn reverse_endianness(self) -> FixResult<Bits> {
        if self.len() % 8 != 0 {
            return Err(FixError::Unsupported {
                op: "reverse_endianness",
                reason: format!("length {} is not a multiple of 8", self.len()),
            });
        }
        let swapped = safe_rshift(self.bits().swap_bytes(), u64::from(MAX_WIDTH - self.len()));
        Ok(Bits::new(swapped, self.len()))
    }

    /// Number of zero bits above the highest set bit.
    pub fn count_leading_zeros(self) -> u32 {
        let bits = self.bits();
        if bits == 0 {
            self.len()
        } else {
            self.len() - (MAX_WIDTH - bits.leading_zeros())
        }
    }

    /// Unsigned product, `2 * len` bits wide.
    ///
    /// # Panics
    ///
    /// Panics if the operand widths differ or the product is wider than [`MAX_WIDTH`].
    pub fn mul(self, rhs: Bits) -> Bits {
        let len = self.product_width(rhs);
        Bits::new(self.bits().wrapping_mul(rhs.bits()), len)
    }

    /// Signed product, `2 * len` bits wide.
    ///
    /// # Panics
    ///
    /// Panics if the operand widths differ or the product is wider than [`MAX_WIDTH`].
    pub fn mul_signed(self, rhs: Bits) -> Bits {
        let len = self.product_width(rhs);
        let product = self.signed().value() * rhs.signed().value();
        Bits::new(product as u64, len)
    }

    fn product_width(self, rhs: Bits) -> u32 {
        assert_eq!(self.len(), rhs.len(), "Bits width mismatch in MUL");
        let len = self.len() * 2;
        assert!(
            len <= MAX_WIDTH,
            "product of two {}-bit vectors exceeds {MAX_WIDTH} bits",
            self.len()
        );
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(bits: u64, len: u32) -> Bits {
        Bits::new(bits, len)
    }

    #[test]
    fn zero_extend_raises_length() {
        let v = b(0b1010, 4).zero_extend(8);
        assert_eq!(v.len(), 8);
        assert_eq!(v.bits(), 0b0000_1010);
    }

    #[test]
    fn sign_extend_copies_top_bit() {
        assert_eq!(b(0b1010, 4).sign_extend(8).bits(), 0b1111_1010);
        assert_eq!(b(0b0110, 4).sign_extend(8).bits(), 0b0000_0110);
        assert_eq!(b(1, 1).sign_extend(64).bits(), u64::MAX);
        assert_eq!(b(0, 0).sign_extend(8), Bits::zeros(8));
    }

    #[test]
    #[should_panic(expected = "cannot sign-extend")]
    fn sign_extend_narrowing_panics() {
        b(0, 8).sign_extend(4);
    }

    #[test]
    fn truncate_keeps_low_bits() {
        let v = b(0xABCD, 16).truncate(8);
        assert_eq!(v.len(), 8);
        assert_eq!(v.bits(), 0xCD);
        assert_eq!(b(0xABCD, 16).truncate(0).len(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot truncate")]
    fn truncate_to_larger_panics() {
        b(0xF, 4).truncate(8);
    }

    #[test]
    fn truncate_lsb_keeps_high_bits() {
        assert_eq!(b(0xABCD, 16).truncate_lsb(4).bits(), 0xA);
        assert_eq!(b(0xABCD, 16).truncate_lsb(16).bits(), 0xABCD);
        assert_eq!(b(u64::MAX, 64).truncate_lsb(0).len(), 0);
    }

    #[test]
    fn subrange_top_nibble() {
        let v = b(0b1011_0101, 8).subrange(7, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.bits(), 0b1011);
        assert_eq!(b(0b1011_0101, 8).subrange(0, 0).bits(), 1);
        assert_eq!(b(u64::MAX, 64).subrange(63, 0), Bits::ones(64));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn subrange_past_width_panics() {
        b(0, 8).subrange(8, 0);
    }

    #[test]
    fn slice_from_start() {
        let v = b(0xABCD, 16).slice(4, 8);
        assert_eq!(v.len(), 8);
        assert_eq!(v.bits(), 0xBC);
        assert_eq!(b(0xABCD, 16).slice(16, 0).len(), 0);
    }

    #[test]
    fn append_places_first_operand_high() {
        let v = b(0xA, 4).append(b(0x5, 4));
        assert_eq!(v.len(), 8);
        assert_eq!(v.bits(), 0xA5);
        assert_eq!(Bits::zeros(0).append(b(3, 2)).bits(), 3);
        assert_eq!(b(3, 2).append(Bits::zeros(0)).bits(), 3);
        assert_eq!(b(1, 1).append(Bits::zeros(63)).bits(), 1 << 63);
    }

    #[test]
    #[should_panic(expected = "exceeds 64 bits")]
    fn append_too_wide_panics() {
        Bits::zeros(40).append(Bits::zeros(25));
    }

    #[test]
    fn replicate_counts() {
        assert_eq!(b(0b10, 2).replicate(3).bits(), 0b101010);
        assert_eq!(b(0b10, 2).replicate(3).len(), 6);
        assert_eq!(b(0b101, 3).replicate(1), b(0b101, 3));
        assert_eq!(b(0b101, 3).replicate(0).len(), 0);
        assert_eq!(b(1, 1).replicate(64), Bits::ones(64));
        assert_eq!(b(0xAB, 8).replicate(5).bits(), 0xAB_AB_AB_AB_AB);
    }

    #[test]
    fn update_subrange_preserves_other_bits() {
        let v = b(0xFFFF, 16).update_subrange(11, 4, b(0x00, 8));
        assert_eq!(v.bits(), 0xF00F);
        assert_eq!(v.len(), 16);
        let w = b(0, 8).update_subrange(3, 0, b(0b1001, 4));
        assert_eq!(w.subrange(3, 0).bits(), 0b1001);
    }

    #[test]
    fn set_slice_writes_at_offset() {
        let v = b(0, 16).set_slice(4, b(0xAB, 8));
        assert_eq!(v.bits(), 0x0AB0);
        assert_eq!(b(0xFF, 8).set_slice(3, Bits::zeros(0)).bits(), 0xFF);
    }

    #[test]
    fn logical_shifts() {
        assert_eq!(b(0b1001, 4).shl(1).bits(), 0b0010);
        assert_eq!(b(0b1001, 4).shr(1).bits(), 0b0100);
        assert_eq!(b(0xFF, 8).shl(8).bits(), 0);
        assert_eq!(b(0xFF, 8).shr(200).bits(), 0);
        assert_eq!(b(1, 64).shl(63).bits(), 1 << 63);
    }

    #[test]
    fn arithmetic_shift_fills_sign() {
        assert_eq!(b(0b1000, 4).arith_shr(2).bits(), 0b1110);
        assert_eq!(b(0b0100, 4).arith_shr(2).bits(), 0b0001);
        assert_eq!(b(0x80, 8).arith_shr(100).bits(), 0xFF);
        assert_eq!(b(1 << 63, 64).arith_shr(63), Bits::ones(64));
        assert_eq!(Bits::zeros(0).arith_shr(3).len(), 0);
    }

    #[test]
    fn shift_by_vector_amount() {
        let v = b(0b0011, 4);
        assert_eq!(v.shift_bits_left(b(2, 4)).bits(), 0b1100);
        assert_eq!(v.shift_bits_right(b(1, 4)).bits(), 0b0001);
        assert_eq!(b(0b1000, 4).shift_bits_right_arith(b(3, 2)).bits(), 0b1111);
        assert_eq!(v.shift_bits_left(b(u64::MAX, 64)).bits(), 0);
    }

    #[test]
    fn reverse_endianness_swaps_bytes() {
        assert_eq!(b(0x1234, 16).reverse_endianness().unwrap().bits(), 0x3412);
        assert_eq!(
            b(0x11223344, 32).reverse_endianness().unwrap().bits(),
            0x44332211
        );
        assert_eq!(b(0xAB, 8).reverse_endianness().unwrap().bits(), 0xAB);
        assert_eq!(Bits::zeros(0).reverse_endianness().unwrap().len(), 0);
        assert_eq!(
            b(0x0102030405060708, 64).reverse_endianness().unwrap().bits(),
            0x0807060504030201
        );
    }

    #[test]
    fn reverse_endianness_rejects_partial_bytes() {
        let err = b(0x123, 12).reverse_endianness().unwrap_err();
        assert!(matches!(err, FixError::Unsupported { .. }));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(b(0b0001, 4).count_leading_zeros(), 3);
        assert_eq!(b(0, 12).count_leading_zeros(), 12);
        assert_eq!(b(0x80, 8).count_leading_zeros(), 0);
        assert_eq!(Bits::zeros(0).count_leading_zeros(), 0);
    }

    #[test]
    fn products() {
        assert_eq!(b(0xFF, 8).mul(b(0xFF, 8)).bits(), 0xFE01);
        assert_eq!(b(0xFF, 8).mul(b(0xFF, 8)).len(), 16);
        // -1 * -1 = 1
        assert_eq!(b(0xFF, 8).mul_signed(b(0xFF, 8)).bits(), 1);
        // -2 * 3 = -6
        assert_eq!(b(0xE, 4).mul_signed(b(3, 4)).bits(), 0b1111_1010);
        assert_eq!(
            b(u32::MAX as u64, 32).mul(b(u32::MAX as u64, 32)).bits(),
            0xFFFF_FFFE_0000_0001
        );
    }
}
