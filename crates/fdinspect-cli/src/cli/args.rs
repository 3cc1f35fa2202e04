//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Print a file's stat record and contents
///
/// Echoes every argument it was started with, opens the target file,
/// prints its descriptor and the twelve stat fields, then streams the
/// file's bytes to stdout.
#[derive(Parser, Debug)]
#[command(name = "fdinspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to inspect [default: README.md]
    #[arg(short, long, env = "FDINSPECT_PATH")]
    pub path: Option<PathBuf>,

    /// Read one byte from the randomness source after streaming
    #[arg(long)]
    pub sample_random: bool,

    /// Randomness source to sample (implies --sample-random)
    #[arg(long, value_name = "PATH")]
    pub random_source: Option<PathBuf>,

    /// Metadata output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write content with ASCII escapes instead of raw bytes
    #[arg(long)]
    pub escape: bool,

    /// Config file [default: platform config dir]
    #[arg(short, long, env = "FDINSPECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Extra arguments, echoed but otherwise ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
