//! The shared response envelope for entity-carrying endpoints
//!
//! Every fetch returns the same envelope shape with a different subset of
//! arrays populated: a champion response carries the champion plus the
//! races, classes, abilities, and artist it references, so one round trip
//! resolves the whole fan-out.

use serde::{Deserialize, Serialize};

use super::ability::{Ability, AbilityGroup};
use super::rune::{Champion, Equip, Relic, Spell};
use super::shim::{Artist, Class, Expansion, Race};

/// JSON envelope with one optional array per entity kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Expansions; present only on the init response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansions: Option<Vec<Expansion>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub champs: Option<Vec<Champion>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spells: Option<Vec<Spell>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub equips: Option<Vec<Equip>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relics: Option<Vec<Relic>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Ability>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_groups: Option<Vec<AbilityGroup>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub races: Option<Vec<Race>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<Class>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<Artist>>,
}
