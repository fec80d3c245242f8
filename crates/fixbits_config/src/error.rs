//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `fixbits.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("cannot read fixbits.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid TOML or does not match the schema.
    #[error("malformed fixbits.toml: {0}")]
    ParseError(String),

    /// A field parsed but holds a value the runtime cannot use.
    #[error("invalid `{field}` in fixbits.toml: {reason}")]
    ValidationError {
        /// Dotted path of the offending field, e.g. `runtime.seed`.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}
