//! Dispatches to the command handler matching the parsed arguments.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, coverage::coverage, init::init, lookup::lookup, merge::merge,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Coverage(cmd)) => coverage(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
