//! Expansion display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Expansion;

/// Expansion row for `expansion list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExpansionRow {
    /// Expansion ID (its position in the seeded list)
    #[tabled(rename = "ID")]
    pub id: String,

    /// Expansion name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&Expansion> for ExpansionRow {
    fn from(expansion: &Expansion) -> Self {
        Self {
            id: expansion.id.to_string(),
            name: expansion.name.clone(),
        }
    }
}

impl From<Expansion> for ExpansionRow {
    fn from(expansion: Expansion) -> Self {
        ExpansionRow::from(&expansion)
    }
}
