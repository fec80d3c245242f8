//! Fixed-width bit-vector and checked-integer arithmetic for generated ISA simulators.
//!
//! This crate provides the value types that instruction-semantics code is
//! evaluated over: [`Bits`], a bit-vector of up to [`MAX_WIDTH`] bits with an
//! explicit length, and [`Int`], a signed integer whose arithmetic fails instead
//! of wrapping. All values are plain `Copy` data; every operation consumes its
//! operands and returns a new value.

#![warn(missing_docs)]

pub mod bits;
pub mod bridge;
pub mod error;
pub mod int;
pub mod structure;
pub mod text;
pub mod vector;
pub mod word;

pub use bits::{Bits, MAX_WIDTH};
pub use bridge::{get_slice_int, set_slice_int};
pub use error::{ErrorKind, FixError, FixResult};
pub use int::{Int, MachInt};
pub use text::{dec_str, hex_str, hex_str_upper, valid_hex_bits, write_bits};
pub use vector::BitVector;
