//! Ability and ability-group models

use serde::{Deserialize, Serialize};

use super::Id;

/// A single ability rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    /// Ability ID
    pub id: Id,

    /// Action point cost (0 for passive abilities)
    pub ap_cost: u8,

    /// Display name
    pub name: String,

    /// Rules text, with game-text markup
    pub short_description: String,

    /// Non-zero for abilities that must be activated
    pub activation_type: u8,

    /// Rank level within the group (0 when unranked)
    pub level: u8,

    /// Cooldown in turns (0 for none)
    pub cooldown: u8,

    /// Nora cost adjustment; negative ranks refund nora
    pub nora_cost: i8,

    /// Icon asset name
    pub icon_name: String,

    /// Owning ability group
    pub group: Id,
}

/// A ranked progression of ability variants sharing a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityGroup {
    /// Group ID
    pub id: Id,

    /// Group name
    pub name: String,

    /// Ability IDs in rank order
    pub ranks: Vec<Id>,
}
