//! Failure reporting for the fixbits runtime.
//!
//! Runtime operations return [`FixError`](fixbits_core::FixError) values; the
//! host forwards them as [`Failure`] records into a [`FailureSink`], which
//! either aborts the run ([`AbortSink`]) or accumulates them for later
//! inspection ([`RecordingSink`]).

#![warn(missing_docs)]

pub mod failure;
pub mod sink;

pub use failure::Failure;
pub use sink::{AbortSink, FailureSink, RecordingSink};
