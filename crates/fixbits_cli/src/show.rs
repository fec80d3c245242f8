//! `fixbits show`: render a bit-vector literal.

use fixbits_core::Bits;

use crate::literal::parse_bits;
use crate::{GlobalArgs, ShowArgs};

/// Runs the `fixbits show` command.
pub fn run(args: &ShowArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let v = parse_bits(&args.literal, args.len)?;
    for line in describe(v, global.quiet) {
        println!("{line}");
    }
    Ok(0)
}

/// The rendering, followed by width and values unless `quiet`.
pub fn describe(v: Bits, quiet: bool) -> Vec<String> {
    let mut lines = vec![v.to_string()];
    if !quiet {
        lines.push(format!("  width:    {}", v.len()));
        lines.push(format!("  unsigned: {}", v.decimal_string()));
        lines.push(format!("  signed:   {}", v.signed()));
    }
    lines
}
