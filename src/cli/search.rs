//! One-shot search command

use std::time::Duration;

use indicatif::ProgressBar;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::PoxBaseApi;
use crate::error::Result;
use crate::models::{SearchHitRow, display::styled_hit};
use crate::output::{json, table};
use crate::search::QueryMatcher;

/// Run the search command
///
/// Queries typeahead directly; no cache is involved. The limit flag
/// wins over the configured result cap.
pub async fn run(query: &str, limit: Option<usize>, options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let response = context.client.typeahead(query).await;

    spinner.finish_and_clear();
    let response = response?;

    let mut hits = response.results;
    if let Some(cap) = limit.or(context.config.preferences.results) {
        hits.truncate(cap);
    }

    match context.format {
        OutputFormat::Pretty => {
            if hits.is_empty() {
                println!("No results found.");
                return Ok(());
            }

            let matcher = QueryMatcher::new(query);
            for hit in &hits {
                println!("{}", styled_hit(hit, &matcher));
            }
        }
        OutputFormat::Table => {
            let rows: Vec<SearchHitRow> = hits.iter().map(SearchHitRow::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => println!("{}", json::format_json(&hits)?),
    }

    Ok(())
}
