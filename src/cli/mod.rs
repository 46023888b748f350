//! Command-line interface layer.

use anyhow::Result;

pub mod args;
pub mod commands;
mod context;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{export::export, init::init, render::render};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command: Some(command) }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Render(cmd) => render(cmd),
        Command::Export(cmd) => export(cmd),
        Command::Init => init(),
    }
}
