//! Init command implementation

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{API_BASE_URL, PoxBaseApi, PoxBaseClient};
use crate::config::{Config, Preferences};
use crate::error::Result;

/// Run the init command
///
/// Walks through the API URL and output preferences, pings the API,
/// and saves the config. An unreachable API is a warning, not an
/// error; everything still works once the URL is fixed.
pub async fn run(options: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Poxdex!".bold().green());
    println!("Let's set up your rune index.\n");

    let api_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API base URL")
        .default(API_BASE_URL.to_string())
        .interact_text()?;

    let formats = ["pretty", "table", "json"];
    let format = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&formats)
        .default(0)
        .interact()?;

    let color = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Use colored output?")
        .default(true)
        .interact()?;

    println!("\n{}", "Checking the API...".cyan());
    match PoxBaseClient::new(Some(&api_url)) {
        Ok(client) => match client.init().await {
            Ok(envelope) => {
                let expansions = envelope.expansions.as_ref().map_or(0, Vec::len);
                println!(
                    "{} API reachable, {} expansions indexed",
                    "✓".green(),
                    expansions
                );
            }
            Err(err) => {
                println!("{} Could not reach the API: {err}", "⚠".yellow());
                println!("Saving anyway; fix the URL and run poxdex status to re-check.");
            }
        },
        Err(err) => {
            println!("{} {err}", "⚠".yellow());
            println!("Saving anyway; fix the URL and run poxdex status to re-check.");
        }
    }

    let config = Config {
        // The default URL is left implicit so the config stays portable.
        api_url: (api_url != API_BASE_URL).then_some(api_url),
        preferences: Preferences {
            format: Some(formats[format].to_string()),
            color,
            results: None,
        },
    };

    let config_path = match options.config_ref() {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    config.save_to(config_path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "poxdex status".cyan());
    println!("  {} - View a champion card", "poxdex champ get 1".cyan());
    println!("  {} - Search and browse runes", "poxdex browse".cyan());

    Ok(())
}
