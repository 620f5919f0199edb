//! Ability group display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::truncate;
use crate::client::models::{Ability, AbilityGroup};
use crate::db::RuneDb;
use crate::output::text;

/// One rank of an ability group, as a table row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AbilityRankRow {
    /// Rank level ("--" when unranked)
    #[tabled(rename = "LEVEL")]
    pub level: String,

    /// Ability name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Nora cost adjustment; negative ranks refund
    #[tabled(rename = "NORA")]
    pub nora: String,

    /// Action point cost ("--" for passives)
    #[tabled(rename = "AP")]
    pub ap: String,

    /// Cooldown in turns ("--" for none)
    #[tabled(rename = "CD")]
    pub cd: String,

    /// Rules text with markup stripped
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Ability> for AbilityRankRow {
    fn from(ability: Ability) -> Self {
        Self {
            level: if ability.level > 0 {
                ability.level.to_string()
            } else {
                "--".to_string()
            },
            name: ability.name,
            nora: ability.nora_cost.to_string(),
            ap: if ability.ap_cost > 0 {
                ability.ap_cost.to_string()
            } else {
                "--".to_string()
            },
            cd: if ability.cooldown > 0 {
                ability.cooldown.to_string()
            } else {
                "--".to_string()
            },
            description: truncate(&text::plain(&ability.short_description), 60),
        }
    }
}

impl From<&Ability> for AbilityRankRow {
    fn from(ability: &Ability) -> Self {
        AbilityRankRow::from(ability.clone())
    }
}

/// An ability group with its ranks resolved, for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct AbilityGroupDetail {
    /// Group name
    pub name: String,

    /// Ranks in progression order
    pub ranks: Vec<AbilityRankRow>,
}

impl AbilityGroupDetail {
    /// Resolve the group's ranks out of the cache. The envelope that
    /// carried the group also carried its rank records.
    pub fn new(group: &AbilityGroup, db: &RuneDb) -> Self {
        Self {
            name: group.name.clone(),
            ranks: group
                .ranks
                .iter()
                .map(|&id| AbilityRankRow::from(db.ability_unchecked(id)))
                .collect(),
        }
    }

    /// Header text shown above the ranks table.
    pub fn format_header(&self) -> String {
        format!("Ability > {}\n", self.name.bold())
    }
}
