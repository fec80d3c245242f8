//! `fixbits slice-int`: extract bits of an integer.

use fixbits_core::{get_slice_int, Bits, MAX_WIDTH};

use crate::literal::{parse_int, LiteralError};
use crate::{GlobalArgs, SliceIntArgs};

/// Runs the `fixbits slice-int` command.
pub fn run(args: &SliceIntArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let v = slice_int(args)?;
    for line in crate::show::describe(v, global.quiet) {
        println!("{line}");
    }
    Ok(0)
}

fn slice_int(args: &SliceIntArgs) -> Result<Bits, LiteralError> {
    if args.len > MAX_WIDTH {
        return Err(LiteralError::TooWide(args.len));
    }
    let n = parse_int(&args.n)?;
    Ok(get_slice_int(args.len, n, args.start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(len: u32, n: &str, start: u32) -> SliceIntArgs {
        SliceIntArgs {
            len,
            n: n.to_string(),
            start,
        }
    }

    #[test]
    fn slices_positive() {
        let v = slice_int(&args(8, "0x690", 4)).unwrap();
        assert_eq!((v.len(), v.bits()), (8, 0x69));
    }

    #[test]
    fn slices_negative_beyond_width() {
        let v = slice_int(&args(16, "-1", 200)).unwrap();
        assert_eq!(v.bits(), 0xFFFF);
    }

    #[test]
    fn rejects_wide_slice() {
        assert_eq!(
            slice_int(&args(65, "1", 0)),
            Err(LiteralError::TooWide(65))
        );
    }
}
