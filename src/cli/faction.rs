//! Faction commands

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::Faction;
use crate::error::Result;
use crate::models::FactionRow;
use crate::output::{json, label, table};

/// Run the faction list command
///
/// The faction wheel is fixed, so nothing is fetched.
pub async fn list(options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::new(options)?;

    match context.format {
        OutputFormat::Pretty => {
            for faction in Faction::ALL {
                println!("{}  {}", faction.short(), label::faction_label(faction));
            }
        }
        OutputFormat::Table => {
            let rows: Vec<FactionRow> = Faction::ALL.into_iter().map(FactionRow::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            let rows: Vec<FactionRow> = Faction::ALL.into_iter().map(FactionRow::from).collect();
            println!("{}", json::format_json(&rows)?);
        }
    }

    Ok(())
}
