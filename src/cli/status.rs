//! Status command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::{API_BASE_URL, PoxBaseApi, PoxBaseClient};
use crate::config::Config;
use crate::error::Result;

/// Run the status command
///
/// Shows where configuration came from, the resolved settings, and
/// whether the API answers.
pub async fn run(options: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Poxdex Status".bold());

    let config_path = match options.config_ref() {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };

    let config = if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
        match Config::load_at(options.config_ref()) {
            Ok(config) => config,
            Err(err) => {
                println!("{} Could not load config: {err}", "✗".red());
                println!("  → Fix the file or re-run 'poxdex init'");
                return Ok(());
            }
        }
    } else {
        println!(
            "Config file: {} {}",
            config_path.display(),
            "(not found, using defaults)".dimmed()
        );
        Config::default()
    };

    let api_url = options
        .api_url_ref()
        .or(config.api_url.as_deref())
        .unwrap_or(API_BASE_URL);
    if api_url == API_BASE_URL {
        println!("API URL: {} {}", api_url, "(default)".dimmed());
    } else {
        println!("API URL: {}", api_url.cyan());
    }

    match config.preferences.format.as_deref() {
        Some(format) => println!("Format preference: {format}"),
        None => println!("Format preference: {}", "none (pretty)".dimmed()),
    }
    println!(
        "Color output: {}",
        if config.preferences.color { "on" } else { "off" }
    );
    if let Some(cap) = config.preferences.results {
        println!("Search result cap: {cap}");
    }

    println!();

    match PoxBaseClient::new(Some(api_url)) {
        Ok(client) => match client.init().await {
            Ok(envelope) => {
                let expansions = envelope.expansions.as_ref().map_or(0, Vec::len);
                println!(
                    "{} API reachable ({} expansions indexed)",
                    "✓".green(),
                    expansions
                );
            }
            Err(err) => {
                println!("{} API unreachable: {err}", "✗".red());
                println!("  → Check the URL or your connection");
            }
        },
        Err(err) => {
            println!("{} {err}", "✗".red());
        }
    }

    Ok(())
}
