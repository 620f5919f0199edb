//! Faction display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Faction;

/// Faction row for `faction list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FactionRow {
    /// Faction ordinal
    #[tabled(rename = "ID")]
    pub id: String,

    /// Two-letter code used in routes and asset names
    #[tabled(rename = "CODE")]
    pub code: String,

    /// Full display name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Faction> for FactionRow {
    fn from(faction: Faction) -> Self {
        Self {
            id: (faction as u8).to_string(),
            code: faction.short().to_string(),
            name: faction.name().to_string(),
        }
    }
}
