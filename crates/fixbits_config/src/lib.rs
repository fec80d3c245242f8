//! Parsing and validation of `fixbits.toml` runtime configuration files.
//!
//! The configuration controls how the runtime seeds its deterministic
//! generator, how undefined values are produced, and which failure sink is
//! installed.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
