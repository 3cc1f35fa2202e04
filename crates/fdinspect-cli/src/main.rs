//! fdinspect - print a file's arguments, metadata and contents.

use std::process::ExitCode;

fn main() -> ExitCode {
    fdinspect_cli::main()
}
