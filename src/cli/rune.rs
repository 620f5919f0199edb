//! Rune card commands
//!
//! One handler per rune kind. Each touches the cache to schedule the
//! fetch, settles, and renders the card. A rune that is still pending
//! after the settle either failed to fetch or does not exist.

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::Id;
use crate::error::{ApiError, Error, Result};
use crate::models::{RuneRow, RuneSheet};
use crate::output::{json, table};

/// Run the champ get command
pub async fn champ_get(
    id: Id,
    flip: bool,
    rank1: Option<usize>,
    rank2: Option<usize>,
    options: &GlobalOptions,
) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.db.champion(id);
    context.settle("Fetching champion...").await;
    context.require_ready()?;

    let champion = context
        .db
        .champion(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Champion {id}")))?;

    let first = pick_rank(&champion.ability_sets[0], champion.defaults[0], rank1, "--rank1")?;
    let second = pick_rank(&champion.ability_sets[1], champion.defaults[1], rank2, "--rank2")?;

    let sheet = RuneSheet::champion(&champion, first, second, &context.db);
    print_sheet(&sheet, flip, context.format)
}

/// Run the spell get command
pub async fn spell_get(id: Id, flip: bool, options: &GlobalOptions) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.db.spell(id);
    context.settle("Fetching spell...").await;
    context.require_ready()?;

    let spell = context
        .db
        .spell(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Spell {id}")))?;

    let sheet = RuneSheet::spell(&spell, &context.db);
    print_sheet(&sheet, flip, context.format)
}

/// Run the equip get command
pub async fn equip_get(id: Id, flip: bool, options: &GlobalOptions) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.db.equip(id);
    context.settle("Fetching equipment...").await;
    context.require_ready()?;

    let equip = context
        .db
        .equip(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Equipment {id}")))?;

    let sheet = RuneSheet::equip(&equip, &context.db);
    print_sheet(&sheet, flip, context.format)
}

/// Run the relic get command
pub async fn relic_get(id: Id, flip: bool, options: &GlobalOptions) -> Result<()> {
    let mut context = CommandContext::new(options)?;

    context.db.relic(id);
    context.settle("Fetching relic...").await;
    context.require_ready()?;

    let relic = context
        .db
        .relic(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Relic {id}")))?;

    let sheet = RuneSheet::relic(&relic, &context.db);
    print_sheet(&sheet, flip, context.format)
}

/// Resolve a 1-based upgrade choice against its set
///
/// No choice means the champion's default for that set.
fn pick_rank(set: &[Id], default: Id, choice: Option<usize>, flag: &str) -> Result<Id> {
    let Some(position) = choice else {
        return Ok(default);
    };

    position
        .checked_sub(1)
        .and_then(|index| set.get(index))
        .copied()
        .ok_or_else(|| Error::Other(format!("{flag} must be between 1 and {}", set.len())))
}

fn print_sheet(sheet: &RuneSheet, flip: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => println!("{}", sheet.render(flip)),
        OutputFormat::Table => println!("{}", table::format_table(&[RuneRow::from(sheet)])),
        OutputFormat::Json => println!("{}", json::format_json(sheet)?),
    }

    Ok(())
}
