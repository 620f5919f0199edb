//! Colored label chips for rarity, nora, and faction tags

use colored::{ColoredString, Colorize};

use crate::client::models::{Faction, Rarity};

/// Styling variant for a label chip
///
/// Rarity chips and the nora tag are distinct variants; a label is
/// never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelStyle {
    Plain,
    Nora,
    Rarity(Rarity),
}

impl LabelStyle {
    /// Paint chip text in this style.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            LabelStyle::Plain => text.normal(),
            LabelStyle::Nora => text.cyan(),
            LabelStyle::Rarity(rarity) => match rarity {
                Rarity::Common => text.white(),
                Rarity::Uncommon => text.green(),
                Rarity::Rare => text.blue(),
                Rarity::Exotic => text.magenta(),
                Rarity::Limited => text.red(),
                Rarity::Legendary => text.yellow(),
            },
        }
    }
}

/// Rarity chip carrying its display name
pub fn rarity_label(rarity: Rarity) -> ColoredString {
    LabelStyle::Rarity(rarity).paint(rarity.label())
}

/// Nora cost chip, e.g. "30 Nora"
pub fn nora_label(cost: i32) -> ColoredString {
    LabelStyle::Nora.paint(&format!("{cost} Nora"))
}

/// Faction chip carrying the faction's display name
pub fn faction_label(faction: Faction) -> ColoredString {
    let name = faction.name();
    match faction {
        Faction::SavageTundra => name.cyan(),
        Faction::IronfistStronghold => name.bright_white(),
        Faction::KthirForest => name.green(),
        Faction::ForglarSwamp => name.blue(),
        Faction::ShatteredPeaks => name.bright_magenta(),
        Faction::SunderedLands => name.yellow(),
        Faction::Underdepths => name.red(),
        Faction::ForsakenWastes => name.magenta(),
    }
}
