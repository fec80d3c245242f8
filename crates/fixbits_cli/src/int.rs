//! `fixbits int`: evaluate a checked integer operation.
//!
//! Failures are routed through the runtime, which prints them and counts
//! them toward the exit code.

use fixbits_core::{FixResult, Int};
use fixbits_runtime::Runtime;

use crate::literal::parse_int;
use crate::setup::terminal_runtime;
use crate::{GlobalArgs, IntArgs, IntOp};

/// Runs the `fixbits int` command.
///
/// Returns exit code 1 if the operation failed.
pub fn run(args: &IntArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let a = parse_int(&args.a)?;
    let b = parse_int(&args.b)?;
    let rt = terminal_runtime(global)?;
    if let Some(value) = evaluate(&rt, args.op, a, b) {
        println!("{value}");
    }
    let summary = rt.finish();
    Ok(if summary.is_clean() { 0 } else { 1 })
}

/// Applies `op`, reporting any failure through `rt`.
pub fn evaluate(rt: &Runtime, op: IntOp, a: Int, b: Int) -> Option<Int> {
    rt.check(apply(op, a, b)).ok()
}

fn apply(op: IntOp, a: Int, b: Int) -> FixResult<Int> {
    match op {
        IntOp::Add => a.add(b),
        IntOp::Sub => a.sub(b),
        IntOp::Mul => a.mul(b),
        IntOp::Tdiv => a.tdiv(b),
        IntOp::Tmod => a.tmod(b),
        IntOp::Fdiv => a.fdiv(b),
        IntOp::Fmod => a.fmod(b),
        IntOp::Ediv => a.ediv(b),
        IntOp::Emod => a.emod(b),
        IntOp::Pow => a.pow(b),
        IntOp::Min => Ok(a.min(b)),
        IntOp::Max => Ok(a.max(b)),
    }
}
