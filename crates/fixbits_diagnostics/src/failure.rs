//! Failure records handed to a sink.

use fixbits_core::{ErrorKind, FixError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reported failure: its category plus a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// The failure category.
    pub kind: ErrorKind,
    /// The message shown to the user.
    pub message: String,
}

impl Failure {
    /// Creates a failure with the given category and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a pattern-match failure.
    pub fn match_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MatchFailure, message)
    }

    /// Returns `true` for failures caused by an out-of-range integer result.
    pub fn is_arithmetic(&self) -> bool {
        self.kind == ErrorKind::ArithmeticRange
    }
}

impl From<&FixError> for Failure {
    fn from(err: &FixError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_error_keeps_message() {
        let err = FixError::Overflow { op: "addition" };
        let failure = Failure::from(&err);
        assert_eq!(failure.kind, ErrorKind::ArithmeticRange);
        assert_eq!(failure.message, "integer addition would overflow");
        assert!(failure.is_arithmetic());
    }

    #[test]
    fn display() {
        let failure = Failure::match_failure("no case for opcode 0x7F");
        assert_eq!(
            failure.to_string(),
            "match failure: no case for opcode 0x7F"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let failure = Failure::new(ErrorKind::ContractViolation, "len != slice.len");
        let json = serde_json::to_string(&failure).unwrap();
        let back: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
