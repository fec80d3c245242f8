//! fixbits CLI: inspect fixed-width bit-vector and checked-integer results.
//!
//! Provides `fixbits show` for rendering literals, `fixbits slice-int` and
//! `fixbits extend` for the structural operations, `fixbits int` for checked
//! integer arithmetic, and `fixbits undef` for sampling undefined values under
//! the configured runtime policy.

#![warn(missing_docs)]

mod extend;
mod int;
mod literal;
mod setup;
mod show;
mod slice;
mod undef;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// fixbits: fixed-width bit-vector arithmetic from the command line.
#[derive(Parser, Debug)]
#[command(name = "fixbits", version, about = "Fixed-width bit-vector toolkit")]
pub struct Cli {
    /// Print only the result.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a `fixbits.toml` file or the directory containing one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a literal with its width and values.
    Show(ShowArgs),
    /// Extract a bit-vector from an integer.
    SliceInt(SliceIntArgs),
    /// Zero- or sign-extend a literal.
    Extend(ExtendArgs),
    /// Evaluate a checked integer operation.
    Int(IntArgs),
    /// Draw undefined bit-vectors.
    Undef(UndefArgs),
}

/// Arguments for the `fixbits show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// `0x..`, `0b..`, or decimal literal.
    #[arg(allow_hyphen_values = true)]
    pub literal: String,

    /// Width in bits (required for decimal literals).
    #[arg(short, long)]
    pub len: Option<u32>,
}

/// Arguments for the `fixbits slice-int` subcommand.
#[derive(Parser, Debug)]
pub struct SliceIntArgs {
    /// Width of the extracted vector.
    pub len: u32,

    /// The integer to slice.
    #[arg(allow_hyphen_values = true)]
    pub n: String,

    /// Index of the lowest extracted bit.
    pub start: u32,
}

/// Arguments for the `fixbits extend` subcommand.
#[derive(Parser, Debug)]
pub struct ExtendArgs {
    /// `0x..` or `0b..` literal.
    pub literal: String,

    /// Target width.
    #[arg(long)]
    pub to: u32,

    /// Copy the top bit instead of filling with zeros.
    #[arg(short, long)]
    pub signed: bool,
}

/// Arguments for the `fixbits int` subcommand.
#[derive(Parser, Debug)]
pub struct IntArgs {
    /// The operation.
    #[arg(value_enum)]
    pub op: IntOp,

    /// Left operand.
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Right operand.
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

/// Arguments for the `fixbits undef` subcommand.
#[derive(Parser, Debug)]
pub struct UndefArgs {
    /// Width of each vector.
    pub len: u32,

    /// How many vectors to draw.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

/// Checked integer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IntOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division rounding toward zero.
    Tdiv,
    /// Remainder of `tdiv`.
    Tmod,
    /// Division rounding toward negative infinity.
    Fdiv,
    /// Remainder of `fdiv`.
    Fmod,
    /// Euclidean division.
    Ediv,
    /// Euclidean remainder.
    Emod,
    /// Exponentiation.
    Pow,
    /// Smaller operand.
    Min,
    /// Larger operand.
    Max,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress everything but the result.
    pub quiet: bool,
    /// Optional path to a config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Show(ref args) => show::run(args, &global),
        Command::SliceInt(ref args) => slice::run(args, &global),
        Command::Extend(ref args) => extend::run(args, &global),
        Command::Int(ref args) => int::run(args, &global),
        Command::Undef(ref args) => undef::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_show() {
        let cli = Cli::parse_from(["fixbits", "show", "0x69"]);
        match cli.command {
            Command::Show(ref args) => {
                assert_eq!(args.literal, "0x69");
                assert!(args.len.is_none());
            }
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn parse_show_negative_decimal() {
        let cli = Cli::parse_from(["fixbits", "show", "-5", "--len", "8"]);
        match cli.command {
            Command::Show(ref args) => {
                assert_eq!(args.literal, "-5");
                assert_eq!(args.len, Some(8));
            }
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn parse_slice_int() {
        let cli = Cli::parse_from(["fixbits", "slice-int", "8", "0x690", "4"]);
        match cli.command {
            Command::SliceInt(ref args) => {
                assert_eq!(args.len, 8);
                assert_eq!(args.n, "0x690");
                assert_eq!(args.start, 4);
            }
            _ => panic!("expected SliceInt command"),
        }
    }

    #[test]
    fn parse_extend() {
        let cli = Cli::parse_from(["fixbits", "extend", "0b101", "--to", "16", "--signed"]);
        match cli.command {
            Command::Extend(ref args) => {
                assert_eq!(args.literal, "0b101");
                assert_eq!(args.to, 16);
                assert!(args.signed);
            }
            _ => panic!("expected Extend command"),
        }
    }

    #[test]
    fn parse_int_op() {
        let cli = Cli::parse_from(["fixbits", "int", "fdiv", "-7", "2"]);
        match cli.command {
            Command::Int(ref args) => {
                assert_eq!(args.op, IntOp::Fdiv);
                assert_eq!(args.a, "-7");
                assert_eq!(args.b, "2");
            }
            _ => panic!("expected Int command"),
        }
    }

    #[test]
    fn parse_undef() {
        let cli = Cli::parse_from(["fixbits", "undef", "32", "-n", "4"]);
        match cli.command {
            Command::Undef(ref args) => {
                assert_eq!(args.len, 32);
                assert_eq!(args.count, 4);
            }
            _ => panic!("expected Undef command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "fixbits",
            "--quiet",
            "--config",
            "/path/to/fixbits.toml",
            "show",
            "0b1",
        ]);
        assert!(cli.quiet);
        assert_eq!(cli.config.as_deref(), Some("/path/to/fixbits.toml"));
    }

    #[test]
    fn rejects_unknown_op() {
        assert!(Cli::try_parse_from(["fixbits", "int", "xor", "1", "2"]).is_err());
    }
}
