//! Poxdex CLI - Terminal rune index for the PoxBase reference API

use clap::Parser;

mod cli;
mod client;
mod config;
mod db;
mod error;
mod models;
mod output;
mod search;

use cli::{
    AbilityCommands, ChampCommands, Cli, Commands, EquipCommands, ExpansionCommands,
    FactionCommands, GlobalOptions, RelicCommands, SpellCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the flag when set explicitly.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "warn" }),
    )
    .init();

    let options = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&options).await,
        Commands::Status => cli::status::run(&options).await,
        Commands::Version => {
            println!("poxdex version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Champ(command) => match command {
            ChampCommands::Get {
                id,
                flip,
                rank1,
                rank2,
            } => cli::rune::champ_get(id, flip, rank1, rank2, &options).await,
        },
        Commands::Spell(command) => match command {
            SpellCommands::Get { id, flip } => cli::rune::spell_get(id, flip, &options).await,
        },
        Commands::Equip(command) => match command {
            EquipCommands::Get { id, flip } => cli::rune::equip_get(id, flip, &options).await,
        },
        Commands::Relic(command) => match command {
            RelicCommands::Get { id, flip } => cli::rune::relic_get(id, flip, &options).await,
        },
        Commands::Ability(command) => match command {
            AbilityCommands::Get { id } => cli::ability::get(id, &options).await,
        },
        Commands::Expansion(command) => match command {
            ExpansionCommands::List => cli::expansion::list(&options).await,
        },
        Commands::Faction(command) => match command {
            FactionCommands::List => cli::faction::list(&options).await,
        },
        Commands::Search { query, limit } => cli::search::run(&query, limit, &options).await,
        Commands::Browse => cli::browse::run(&options).await,
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
