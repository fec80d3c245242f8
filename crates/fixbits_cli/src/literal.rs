//! Command-line literals: `0x..` hex, `0b..` binary, and signed decimal.

use fixbits_core::{Bits, Int, MAX_WIDTH};

/// A literal that could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// The text is not a recognized literal.
    #[error("invalid literal '{0}'")]
    Malformed(String),
    /// The literal's value needs more bits than requested.
    #[error("'{literal}' does not fit in {len} bits")]
    DoesNotFit {
        /// The literal as written.
        literal: String,
        /// The requested width.
        len: u32,
    },
    /// A decimal literal was given without a width.
    #[error("decimal literal '{0}' needs an explicit width")]
    MissingWidth(String),
    /// The requested width exceeds the container.
    #[error("width {0} exceeds {MAX_WIDTH} bits")]
    TooWide(u32),
}

/// Parses an integer literal. Hex and binary literals are non-negative.
pub fn parse_int(text: &str) -> Result<Int, LiteralError> {
    let malformed = || LiteralError::Malformed(text.to_string());
    let digits = |s: &str| s.replace('_', "");
    let value = if let Some(hex) = text.strip_prefix("0x") {
        i128::from_str_radix(&digits(hex), 16).map_err(|_| malformed())?
    } else if let Some(bin) = text.strip_prefix("0b") {
        i128::from_str_radix(&digits(bin), 2).map_err(|_| malformed())?
    } else {
        digits(text).parse::<i128>().map_err(|_| malformed())?
    };
    if value < 0 && !text.starts_with('-') {
        return Err(malformed());
    }
    Ok(Int::new(value))
}

/// Parses a bit-vector literal.
///
/// Without `len`, hex literals are four bits per digit and binary literals
/// one bit per digit; decimal literals need an explicit width. With `len`,
/// the value is zero-extended or narrowed to that width, failing if set bits
/// would be lost. Negative decimals are stored in two's complement.
pub fn parse_bits(text: &str, len: Option<u32>) -> Result<Bits, LiteralError> {
    if let Some(len) = len {
        if len > MAX_WIDTH {
            return Err(LiteralError::TooWide(len));
        }
    }
    let radix_digits = text
        .strip_prefix("0x")
        .map(|d| (d, 16))
        .or_else(|| text.strip_prefix("0b").map(|d| (d, 2)));
    let Some((digits, radix)) = radix_digits else {
        return match len {
            Some(len) => decimal_bits(text, len),
            None => Err(LiteralError::MissingWidth(text.to_string())),
        };
    };

    let parsed = if radix == 16 {
        Bits::from_hex_str(digits)
    } else {
        Bits::from_binary_str(digits)
    };
    let v = match parsed {
        Some(v) if !v.is_empty() => v,
        _ => return Err(LiteralError::Malformed(text.to_string())),
    };
    match len {
        None => Ok(v),
        Some(len) if v.len() <= len => Ok(v.zero_extend(len)),
        Some(len) if v.unsigned().value() >> len == 0 => Ok(v.truncate(len)),
        Some(len) => Err(LiteralError::DoesNotFit {
            literal: text.to_string(),
            len,
        }),
    }
}

fn decimal_bits(text: &str, len: u32) -> Result<Bits, LiteralError> {
    let n = parse_int(text)?.value();
    let fits = if len == 0 {
        n == 0
    } else {
        let lo = -(1i128 << (len - 1));
        let hi = 1i128 << len;
        lo <= n && n < hi
    };
    if !fits {
        return Err(LiteralError::DoesNotFit {
            literal: text.to_string(),
            len,
        });
    }
    Ok(Bits::from_int(Int::new(n), len))
}
