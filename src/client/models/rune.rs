//! Rune models: the four card-like game-piece kinds
//!
//! Champions, spells, equipment, and relics share a common core record
//! and differ in their kind-specific extensions. Field names mirror the
//! API's camelCase wire format.

use serde::{Deserialize, Serialize};

use super::enums::{Faction, Rarity, Size};
use super::Id;

/// Fields shared by every rune kind, flattened into each rune record
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneCore {
    /// Rune ID, unique within its kind
    pub id: Id,

    /// Display name
    pub name: String,

    /// Rules text, with game-text markup
    pub description: String,

    /// Rarity ordinal
    pub rarity: Rarity,

    /// Nora resource price
    pub nora_cost: u16,

    /// Whether the rune is currently sold
    pub for_sale: bool,

    /// Whether the rune can be traded between players
    pub tradeable: bool,

    /// Whether the rune is legal in ranked play
    pub allow_ranked: bool,

    /// Content hash resolving the rune's image assets
    pub hash: String,

    /// Maximum copies allowed in a deck
    pub deck_limit: u8,
}

/// Champion rune: a deployable unit with combat stats and abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    #[serde(flatten)]
    pub core: RuneCore,

    /// Maximum attack range
    pub max_rng: u8,

    /// Minimum attack range
    pub min_rng: u8,

    /// Defense stat
    pub defense: u8,

    /// Speed stat
    pub speed: u8,

    /// Damage stat
    pub damage: u16,

    /// Hit points
    pub hit_points: u16,

    /// Board footprint
    pub size: Size,

    /// Abilities every copy starts with
    pub starting_abilities: Vec<Id>,

    /// The two ranked choice lists (level 2 and level 3 upgrades)
    pub ability_sets: [Vec<Id>; 2],

    /// Pre-selected choice from each ability set
    pub defaults: [Id; 2],

    /// Class ID references
    pub classes: Vec<Id>,

    /// Race ID references
    pub races: Vec<Id>,

    /// Faction affiliations (at most two)
    pub factions: Vec<Faction>,

    /// Expansion ID reference
    pub expansion: Id,

    /// Artist ID reference
    pub artist: Id,
}

/// Spell rune
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    #[serde(flatten)]
    pub core: RuneCore,

    /// Flavor text shown on the card back
    pub flavor_text: String,

    /// Casting cooldown in turns
    pub cooldown: u8,

    /// Faction affiliations (at most two)
    pub factions: Vec<Faction>,

    /// Expansion ID reference
    pub expansion: Id,

    /// Artist ID reference
    pub artist: Id,
}

/// Equipment rune
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equip {
    #[serde(flatten)]
    pub core: RuneCore,

    /// Flavor text shown on the card back
    pub flavor_text: String,

    /// Faction affiliations (at most two)
    pub factions: Vec<Faction>,

    /// Expansion ID reference
    pub expansion: Id,

    /// Artist ID reference
    pub artist: Id,
}

/// Relic rune: a stationary deployable with defensive stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relic {
    #[serde(flatten)]
    pub core: RuneCore,

    /// Flavor text shown on the card back
    pub flavor_text: String,

    /// Defense stat
    pub defense: u16,

    /// Hit points
    pub hit_points: u16,

    /// Board footprint
    pub size: Size,

    /// Faction affiliations (at most two)
    pub factions: Vec<Faction>,

    /// Expansion ID reference
    pub expansion: Id,

    /// Artist ID reference
    pub artist: Id,
}
