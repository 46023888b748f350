use std::process::ExitCode;

use clap::Parser;
use lingo::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match lingo::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::error(&err);
            ExitStatus::Error.into()
        }
    }
}
