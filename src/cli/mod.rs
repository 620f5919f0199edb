//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod ability;
pub mod args;
pub mod browse;
pub mod completions;
pub mod context;
pub mod expansion;
pub mod faction;
pub mod init;
pub mod rune;
pub mod search;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::client::models::Id;

/// Poxdex CLI - Terminal rune index for the PoxBase reference API
#[derive(Parser, Debug)]
#[command(name = "poxdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "POXDEX_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override the API base URL
    #[arg(long, global = true, env = "POXDEX_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "POXDEX_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "POXDEX_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize poxdex configuration
    Init,

    /// Show configuration and API status
    Status,

    /// Display version information
    Version,

    /// View champion runes
    #[command(subcommand)]
    Champ(ChampCommands),

    /// View spell runes
    #[command(subcommand)]
    Spell(SpellCommands),

    /// View equipment runes
    #[command(subcommand)]
    Equip(EquipCommands),

    /// View relic runes
    #[command(subcommand)]
    Relic(RelicCommands),

    /// View ability groups
    #[command(subcommand)]
    Ability(AbilityCommands),

    /// View card expansions
    #[command(subcommand)]
    Expansion(ExpansionCommands),

    /// View the eight factions
    #[command(subcommand)]
    Faction(FactionCommands),

    /// Search runes, abilities, and effects by name
    #[command(after_help = "EXAMPLES:\n  \
            poxdex search khan           # Fuzzy name search\n  \
            poxdex search \"frost bite\"   # Multi-word query\n  \
            poxdex search slam --limit 5 # Cap the result list")]
    Search {
        /// Query text
        query: String,

        /// Maximum results shown
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Browse interactively with live typeahead search
    Browse,

    /// Generate shell completions
    #[command(after_help = "\
Completions cover subcommands and flags:
  bash:   poxdex completion bash > /etc/bash_completion.d/poxdex
  zsh:    poxdex completion zsh > \"${fpath[1]}/_poxdex\"
  fish:   poxdex completion fish > ~/.config/fish/completions/poxdex.fish

Re-source completions after upgrading poxdex.")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Champion subcommands
#[derive(Subcommand, Debug)]
pub enum ChampCommands {
    /// Show a champion card
    #[command(
        visible_alias = "g",
        after_help = "EXAMPLES:\n  \
            poxdex champ get 7                    # Card front\n  \
            poxdex champ get 7 --flip             # Card back\n  \
            poxdex champ get 7 --rank1 2 --rank2 1 # Non-default upgrades"
    )]
    Get {
        /// Champion ID
        id: Id,

        /// Show the card back
        #[arg(long, short = 'f')]
        flip: bool,

        /// Level 2 upgrade choice (1-based position in the first set)
        #[arg(long)]
        rank1: Option<usize>,

        /// Level 3 upgrade choice (1-based position in the second set)
        #[arg(long)]
        rank2: Option<usize>,
    },
}

/// Spell subcommands
#[derive(Subcommand, Debug)]
pub enum SpellCommands {
    /// Show a spell card
    #[command(visible_alias = "g")]
    Get {
        /// Spell ID
        id: Id,

        /// Show the card back
        #[arg(long, short = 'f')]
        flip: bool,
    },
}

/// Equipment subcommands
#[derive(Subcommand, Debug)]
pub enum EquipCommands {
    /// Show an equipment card
    #[command(visible_alias = "g")]
    Get {
        /// Equipment ID
        id: Id,

        /// Show the card back
        #[arg(long, short = 'f')]
        flip: bool,
    },
}

/// Relic subcommands
#[derive(Subcommand, Debug)]
pub enum RelicCommands {
    /// Show a relic card
    #[command(visible_alias = "g")]
    Get {
        /// Relic ID
        id: Id,

        /// Show the card back
        #[arg(long, short = 'f')]
        flip: bool,
    },
}

/// Ability group subcommands
#[derive(Subcommand, Debug)]
pub enum AbilityCommands {
    /// Show an ability group with its ranks
    #[command(visible_alias = "g")]
    Get {
        /// Ability group ID
        id: Id,
    },
}

/// Expansion subcommands
#[derive(Subcommand, Debug)]
pub enum ExpansionCommands {
    /// List card expansions
    List,
}

/// Faction subcommands
#[derive(Subcommand, Debug)]
pub enum FactionCommands {
    /// List the eight factions
    List,
}
