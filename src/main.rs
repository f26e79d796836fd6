//! tfn - Command-line tool for checking CSS transition-timing-function values

use std::process::ExitCode;

use timing_fn::cli;

fn main() -> ExitCode {
    cli::run()
}
