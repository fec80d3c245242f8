//! Raw 64-bit word helpers.
//!
//! These operate on a bare `u64` pattern whose length is tracked by the
//! caller. [`Bits`](crate::Bits) is built on them, and generated code that
//! already knows its widths statically can call the `fast_*` variants directly.

use crate::int::Int;

/// Number of bits in the backing machine word.
pub const WORD_BITS: u32 = 64;

/// Returns a word with the low `len` bits set.
///
/// `mask(0)` is `0` and `mask(64)` is `u64::MAX`; neither shifts by the full
/// word width.
pub fn mask(len: u32) -> u64 {
    if len == 0 {
        0
    } else if len >= WORD_BITS {
        u64::MAX
    } else {
        u64::MAX >> (WORD_BITS - len)
    }
}

/// Zeroes every bit at index `len` and above.
pub fn bzhi(bits: u64, len: u32) -> u64 {
    bits & mask(len)
}

/// Logical right shift that yields 0 for shift amounts of 64 or more.
pub fn safe_rshift(x: u64, n: u64) -> u64 {
    if n >= u64::from(WORD_BITS) {
        0
    } else {
        x >> n
    }
}

/// Left shift that yields 0 for shift amounts of 64 or more.
pub fn safe_lshift(x: u64, n: u64) -> u64 {
    if n >= u64::from(WORD_BITS) {
        0
    } else {
        x << n
    }
}

/// Two's-complement value of the low `len` bits of `bits`.
///
/// The sign is read from bit `len - 1` and applied by subtracting `2^len`,
/// so the result is correct for any logical width up to 64. A zero-width
/// pattern reads as 0.
pub(crate) fn signed_value(bits: u64, len: u32) -> i128 {
    let bits = bzhi(bits, len);
    if len == 0 {
        return 0;
    }
    let unsigned = i128::from(bits);
    if (bits >> (len - 1)) & 1 == 1 {
        unsigned - (1i128 << len)
    } else {
        unsigned
    }
}

/// Zero-extends an `n`-bit pattern.
pub fn fast_zero_extend(op: u64, n: u32) -> u64 {
    bzhi(op, n)
}

/// Sign-extends the `n`-bit pattern `op` to `m` bits.
///
/// # Panics
///
/// Panics unless `n <= m <= 64`.
pub fn fast_sign_extend(op: u64, n: u32, m: u32) -> u64 {
    assert!(
        n <= m && m <= WORD_BITS,
        "cannot sign-extend {n} bits to {m} bits"
    );
    let op = bzhi(op, n);
    if n == 0 || (op >> (n - 1)) & 1 == 0 {
        op
    } else {
        op | (mask(m) & !mask(n))
    }
}

/// Unsigned value of a raw pattern.
pub fn fast_unsigned(op: u64) -> Int {
    Int::from(op)
}

/// Signed value of the low `n` bits of a raw pattern.
pub fn fast_signed(op: u64, n: u32) -> Int {
    Int::new(signed_value(op, n))
}

/// Extracts `len` bits of `op` starting at bit `start`.
pub fn fast_slice(op: u64, start: u32, len: u32) -> u64 {
    bzhi(safe_rshift(op, u64::from(start)), len)
}

/// Overwrites bits `[m, n]` of `op` with the low bits of `slice`.
///
/// # Panics
///
/// Panics unless `m <= n < 64`.
pub fn fast_update_subrange(op: u64, n: u32, m: u32, slice: u64) -> u64 {
    assert!(m <= n && n < WORD_BITS, "invalid subrange [{n}:{m}]");
    let field = mask(n - m + 1) << m;
    (op & !field) | ((slice << m) & field)
}

/// Concatenates `times` copies of the `width`-bit pattern `v`.
///
/// # Panics
///
/// Panics if the result would be wider than 64 bits.
pub fn fast_replicate_bits(width: u32, v: u64, times: u32) -> u64 {
    assert!(
        u64::from(width) * u64::from(times) <= u64::from(WORD_BITS),
        "replicating {width} bits {times} times exceeds {WORD_BITS} bits"
    );
    let v = bzhi(v, width);
    (0..times).fold(0, |acc, _| safe_lshift(acc, u64::from(width)) | v)
}

/// Places `hi` above the `lo_len`-bit pattern `lo`.
pub fn append_raw(hi: u64, lo: u64, lo_len: u32) -> u64 {
    safe_lshift(hi, u64::from(lo_len)) | bzhi(lo, lo_len)
}
