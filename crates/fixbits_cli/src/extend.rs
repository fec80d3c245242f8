//! `fixbits extend`: zero- or sign-extend a literal.

use fixbits_core::{Bits, MAX_WIDTH};

use crate::literal::{parse_bits, LiteralError};
use crate::{ExtendArgs, GlobalArgs};

/// Runs the `fixbits extend` command.
pub fn run(args: &ExtendArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let v = extend(args)?;
    for line in crate::show::describe(v, global.quiet) {
        println!("{line}");
    }
    Ok(0)
}

fn extend(args: &ExtendArgs) -> Result<Bits, Box<dyn std::error::Error>> {
    if args.to > MAX_WIDTH {
        return Err(LiteralError::TooWide(args.to).into());
    }
    let v = parse_bits(&args.literal, None)?;
    if args.to < v.len() {
        return Err(format!("cannot extend {} bits to {} bits", v.len(), args.to).into());
    }
    Ok(if args.signed {
        v.sign_extend(args.to)
    } else {
        v.zero_extend(args.to)
    })
}
