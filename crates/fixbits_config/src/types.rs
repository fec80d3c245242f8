//! Configuration types deserialized from `fixbits.toml`.

use serde::Deserialize;
use std::fmt;

/// The top-level configuration parsed from `fixbits.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixbitsConfig {
    /// Runtime settings.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Settings for a runtime context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Seed for the deterministic generator behind undefined values.
    ///
    /// TOML integers are signed; validation rejects negative seeds.
    #[serde(default)]
    pub seed: i64,
    /// How undefined values are produced.
    #[serde(default)]
    pub undefined: UndefinedPolicy,
    /// What happens when an operation fails.
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

impl RuntimeConfig {
    /// The seed as the generator expects it.
    ///
    /// Negative values, which validation rejects, map to 0.
    pub fn seed_u64(&self) -> u64 {
        u64::try_from(self.seed).unwrap_or(0)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            undefined: UndefinedPolicy::Zero,
            on_failure: FailurePolicy::Abort,
        }
    }
}

/// How the runtime produces values the model leaves undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// All-zero bits, `false`, and the lower bound of ranges.
    #[default]
    Zero,
    /// Values drawn from the seeded generator.
    Random,
}

/// Which failure sink the runtime installs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Panic on the first failure.
    #[default]
    Abort,
    /// Record failures and let the host inspect them.
    Record,
}

impl fmt::Display for UndefinedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedPolicy::Zero => write!(f, "zero"),
            UndefinedPolicy::Random => write!(f, "random"),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Record => write!(f, "record"),
        }
    }
}
