//! Shell completion generation
//!
//! Completions are static: the API fetches entities by id only, so
//! there is no candidate list to offer beyond subcommands and flags.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Run the completion command, writing the script to stdout
pub fn run(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}
