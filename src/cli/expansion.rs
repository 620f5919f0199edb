//! Expansion commands

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::ExpansionRow;
use crate::output::{json, table};

/// Run the expansion list command
pub async fn list(options: &GlobalOptions) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.settle("Fetching expansions...").await;
    context.require_ready()?;

    let rows: Vec<ExpansionRow> = context
        .db
        .expansions()
        .iter()
        .map(ExpansionRow::from)
        .collect();

    match context.format {
        OutputFormat::Pretty | OutputFormat::Table => println!("{}", table::format_table(&rows)),
        OutputFormat::Json => println!("{}", json::format_json(&rows)?),
    }

    Ok(())
}
