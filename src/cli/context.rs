//! Shared state for command execution

use std::time::Duration;

use clap::ValueEnum;
use indicatif::ProgressBar;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::PoxBaseClient;
use crate::config::Config;
use crate::db::{RuneDb, SyncReport};
use crate::error::{Error, Result};

/// Context for command execution
///
/// Carries the loaded configuration, the API client, the rune cache,
/// and the resolved output format.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,

    /// API client
    pub client: PoxBaseClient,

    /// Rune cache backing this invocation
    pub db: RuneDb,

    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context from global options
    ///
    /// The format flag wins over the configured preference, which wins
    /// over the pretty default. The API URL resolves the same way.
    pub fn new(options: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(options.config_ref())?;

        if !config.preferences.color {
            colored::control::set_override(false);
        }

        let format = options
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(|name| OutputFormat::from_str(name, true).ok())
            })
            .unwrap_or_default();

        let api_url = options.api_url_ref().or(config.api_url.as_deref());
        let client = PoxBaseClient::new(api_url)?;

        Ok(Self {
            config,
            client,
            db: RuneDb::new(),
            format,
        })
    }

    /// Error unless the init payload has arrived
    ///
    /// Expansion names resolve against the init payload, so rune
    /// rendering needs it even when the rune itself was fetched.
    pub fn require_ready(&self) -> Result<()> {
        if self.db.ready() {
            Ok(())
        } else {
            Err(Error::Other(
                "Init data could not be fetched; check the API URL".to_string(),
            ))
        }
    }

    /// Drive scheduled fetches until the cache settles
    ///
    /// Shows a spinner on stderr while the rounds run; the spinner
    /// clears itself so formatted output stays clean.
    pub async fn settle(&mut self, message: &str) -> SyncReport {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        let report = self.db.sync(&self.client).await;

        spinner.finish_and_clear();
        report
    }
}
