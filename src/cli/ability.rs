//! Ability group commands

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::Id;
use crate::error::{ApiError, Result};
use crate::models::AbilityGroupDetail;
use crate::output::{json, table};

/// Run the ability get command
pub async fn get(id: Id, options: &GlobalOptions) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.db.ability_group(id);
    context.settle("Fetching ability...").await;

    let group = context
        .db
        .ability_group(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Ability group {id}")))?;

    let detail = AbilityGroupDetail::new(&group, &context.db);

    match context.format {
        OutputFormat::Pretty => {
            println!("{}", detail.format_header());
            println!("{}", table::format_table(&detail.ranks));
        }
        OutputFormat::Table => println!("{}", table::format_table(&detail.ranks)),
        OutputFormat::Json => println!("{}", json::format_json(&detail)?),
    }

    Ok(())
}
