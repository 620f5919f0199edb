//! Typeahead search models

use serde::{Deserialize, Serialize};

use super::enums::Rarity;
use super::Id;

/// What a search hit points at, adjacently tagged on the wire as
/// `"kind"` plus `"id"`. Rune and ability hits carry numeric ids;
/// effect-family hits carry string keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum SearchTarget {
    Champion(Id),
    Spell(Id),
    Equip(Id),
    Relic(Id),
    #[serde(rename = "ability")]
    AbilityGroup(Id),
    Race(Id),
    Effect(String),
    Condition(String),
    Damage(String),
}

impl SearchTarget {
    /// Display label for the hit's kind chip
    pub fn label(&self) -> &'static str {
        match self {
            SearchTarget::Champion(_) => "Champion",
            SearchTarget::Spell(_) => "Spell",
            SearchTarget::Equip(_) => "Equipment",
            SearchTarget::Relic(_) => "Relic",
            SearchTarget::AbilityGroup(_) => "Ability",
            SearchTarget::Race(_) => "Race",
            SearchTarget::Effect(_) => "Effect",
            SearchTarget::Condition(_) => "Condition",
            SearchTarget::Damage(_) => "Damage Type",
        }
    }
}

/// One typeahead result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Matched entity name
    pub name: String,

    /// Detail target, flattened to `kind`/`id` on the wire
    #[serde(flatten)]
    pub target: SearchTarget,

    /// Rarity for the label chip; null for non-rune hits
    pub rarity: Option<Rarity>,
}

/// Response body of the typeahead endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeaheadResponse {
    /// Ranked, server-filtered hits for the query
    pub results: Vec<SearchHit>,
}
