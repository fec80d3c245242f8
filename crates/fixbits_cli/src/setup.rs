//! Shared command setup: configuration lookup and the terminal failure sink.

use std::path::Path;
use std::sync::Arc;

use fixbits_config::{ConfigError, FixbitsConfig};
use fixbits_diagnostics::{Failure, FailureSink};
use fixbits_runtime::Runtime;

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, or `fixbits.toml` in the
/// current directory when the flag is absent.
///
/// `--config` may name either the file itself or the directory holding it.
pub fn load_config(global: &GlobalArgs) -> Result<FixbitsConfig, ConfigError> {
    match global.config {
        Some(ref path) => load_config_at(Path::new(path)),
        None => fixbits_config::load_config(&std::env::current_dir()?),
    }
}

fn load_config_at(path: &Path) -> Result<FixbitsConfig, ConfigError> {
    if path.is_dir() {
        return fixbits_config::load_config(path);
    }
    let content = std::fs::read_to_string(path)?;
    fixbits_config::load_config_from_str(&content)
}

/// Builds a runtime whose failures are printed to stderr.
pub fn terminal_runtime(global: &GlobalArgs) -> Result<Runtime, ConfigError> {
    let config = load_config(global)?;
    Ok(Runtime::with_sink(config.runtime, Arc::new(StderrSink)))
}

/// Prints each failure as an `error:` line.
struct StderrSink;

impl FailureSink for StderrSink {
    fn report(&self, failure: Failure) {
        eprintln!("error: {failure}");
    }
}
