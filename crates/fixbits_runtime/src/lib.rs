//! The runtime context that generated instruction semantics run against.
//!
//! A [`Runtime`] owns everything the evaluated code may touch besides its
//! operands: the failure sink that receives arithmetic, assertion and
//! pattern-match failures, and the seeded generator behind undefined values.
//! Creating one replaces process-wide setup and dropping or
//! [`finish`](Runtime::finish)ing it replaces teardown.

#![warn(missing_docs)]

pub mod context;
pub mod undefined;

pub use context::{RunSummary, Runtime};
