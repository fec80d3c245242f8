//! `fixbits undef`: draw undefined values the way a configured runtime does.

use fixbits_core::Bits;
use fixbits_runtime::Runtime;

use crate::literal::LiteralError;
use crate::setup::terminal_runtime;
use crate::{GlobalArgs, UndefArgs};

/// Runs the `fixbits undef` command.
pub fn run(args: &UndefArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.len > fixbits_core::MAX_WIDTH {
        return Err(LiteralError::TooWide(args.len).into());
    }
    let mut rt = terminal_runtime(global)?;
    if !global.quiet {
        eprintln!(
            "   Drawing {} with seed {} ({} policy)",
            args.count,
            rt.config().seed,
            rt.config().undefined
        );
    }
    for v in draw(&mut rt, args.len, args.count) {
        println!("{v}");
    }
    Ok(0)
}

fn draw(rt: &mut Runtime, len: u32, count: usize) -> Vec<Bits> {
    (0..count).map(|_| rt.undefined_bits(len)).collect()
}
