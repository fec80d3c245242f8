//! Error types for checked arithmetic and runtime consistency failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The standard result type for fallible runtime operations.
pub type FixResult<T> = Result<T, FixError>;

/// A failure raised by a runtime operation.
///
/// None of these are recoverable at this layer. The host decides whether a
/// failure aborts a single instruction or the whole simulation, usually by
/// forwarding it to a failure sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    /// The exact result is larger than the checked integer maximum.
    #[error("integer {op} would overflow")]
    Overflow {
        /// The operation that overflowed (e.g. "addition").
        op: &'static str,
    },

    /// The exact result is smaller than the checked integer minimum.
    #[error("integer {op} would underflow")]
    Underflow {
        /// The operation that underflowed.
        op: &'static str,
    },

    /// Negating the minimum integer has no representable result.
    #[error("integer negation would overflow")]
    NegationOverflow,

    /// A division or modulo by zero.
    #[error("division by zero in {op}")]
    DivisionByZero {
        /// The division operation.
        op: &'static str,
    },

    /// A checked integer did not fit the machine integer range.
    #[error("lost precision converting {value} to a machine integer")]
    PrecisionLoss {
        /// The value that could not be narrowed.
        value: i128,
    },

    /// A checked integer was used as a length or index but is out of range.
    #[error("{value} is not a valid bit index or length")]
    IndexOutOfRange {
        /// The offending value.
        value: i128,
    },

    /// A bit-vector length exceeds the container width.
    #[error("bit-vector length {len} exceeds the {max}-bit container")]
    WidthTooLarge {
        /// The requested length.
        len: u32,
        /// The container width.
        max: u32,
    },

    /// Exponentiation was called with a negative exponent.
    #[error("negative exponent in integer power")]
    NegativeExponent,

    /// A shift amount was negative.
    #[error("invalid shift amount {amount}")]
    InvalidShift {
        /// The shift amount.
        amount: i128,
    },

    /// A supplied slice does not have the requested length.
    #[error("slice length mismatch: expected {expected}, got {actual}")]
    SliceLengthMismatch {
        /// The requested length.
        expected: u32,
        /// The length of the slice actually supplied.
        actual: u32,
    },

    /// A slice does not fit inside the target's width.
    #[error("slice [{start}, {start}+{len}) exceeds width {width}")]
    SliceOutOfRange {
        /// First bit of the slice.
        start: u32,
        /// Slice length.
        len: u32,
        /// Width of the value being sliced.
        width: u32,
    },

    /// The operation is not defined for these operands.
    #[error("unsupported operation {op}: {reason}")]
    Unsupported {
        /// The operation name.
        op: &'static str,
        /// Why the operands are not supported.
        reason: String,
    },

    /// Generated dispatch code found no matching case.
    #[error("pattern match failure: {0}")]
    MatchFailure(String),

    /// An assertion in generated code did not hold.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
}

impl FixError {
    /// Classifies the error into its failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FixError::Overflow { .. }
            | FixError::Underflow { .. }
            | FixError::NegationOverflow
            | FixError::DivisionByZero { .. }
            | FixError::PrecisionLoss { .. }
            | FixError::IndexOutOfRange { .. } => ErrorKind::ArithmeticRange,
            FixError::WidthTooLarge { .. }
            | FixError::NegativeExponent
            | FixError::InvalidShift { .. }
            | FixError::SliceLengthMismatch { .. }
            | FixError::SliceOutOfRange { .. } => ErrorKind::ContractViolation,
            FixError::Unsupported { .. } => ErrorKind::Unsupported,
            FixError::MatchFailure(_) => ErrorKind::MatchFailure,
            FixError::AssertionFailed(_) => ErrorKind::Assertion,
        }
    }
}

/// The category of a runtime failure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A checked integer operation left the representable range.
    ArithmeticRange,
    /// A caller broke an operation's precondition.
    ContractViolation,
    /// The operation is deliberately not implemented for these operands.
    Unsupported,
    /// Generated code failed to match any case.
    MatchFailure,
    /// An assertion in generated code failed.
    Assertion,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ArithmeticRange => write!(f, "arithmetic range"),
            ErrorKind::ContractViolation => write!(f, "contract violation"),
            ErrorKind::Unsupported => write!(f, "unsupported"),
            ErrorKind::MatchFailure => write!(f, "match failure"),
            ErrorKind::Assertion => write!(f, "assertion"),
        }
    }
}
