//! Binvis - render binary files as Hilbert-curve images and rebuild them from edits

use std::process::ExitCode;

use binvis::cli;

fn main() -> ExitCode {
    cli::run()
}
