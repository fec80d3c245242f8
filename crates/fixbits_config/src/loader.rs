//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::FixbitsConfig;
use std::path::Path;

/// File name looked up inside a project directory.
pub const CONFIG_FILE_NAME: &str = "fixbits.toml";

/// Loads and validates `fixbits.toml` from a directory.
///
/// A missing file is not an error: the defaults are returned.
pub fn load_config(dir: &Path) -> Result<FixbitsConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(FixbitsConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<FixbitsConfig, ConfigError> {
    let config: FixbitsConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks values that deserialize but cannot be used.
fn validate_config(config: &FixbitsConfig) -> Result<(), ConfigError> {
    if config.runtime.seed < 0 {
        return Err(ConfigError::ValidationError {
            field: "runtime.seed",
            reason: format!("must be non-negative, got {}", config.runtime.seed),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FailurePolicy, UndefinedPolicy};

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, FixbitsConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[runtime]
seed = 42
undefined = "random"
on_failure = "record"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.runtime.seed, 42);
        assert_eq!(config.runtime.undefined, UndefinedPolicy::Random);
        assert_eq!(config.runtime.on_failure, FailurePolicy::Record);
    }

    #[test]
    fn partial_runtime_section() {
        let config = load_config_from_str("[runtime]\nseed = 7\n").unwrap();
        assert_eq!(config.runtime.seed, 7);
        assert_eq!(config.runtime.undefined, UndefinedPolicy::Zero);
        assert_eq!(config.runtime.on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let err = load_config_from_str("[runtime]\nundefined = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = load_config_from_str("[runtime]\nsede = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn negative_seed_is_validation_error() {
        let err = load_config_from_str("[runtime]\nseed = -1\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError {
                field: "runtime.seed",
                ..
            }
        ));
        assert!(err.to_string().contains("non-negative, got -1"));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = load_config_from_str("[runtime]\nseed = \"seven\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[runtime]\non_failure = \"record\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.runtime.on_failure, FailurePolicy::Record);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config, FixbitsConfig::default());
    }
}
