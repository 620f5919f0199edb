//! Thin id/name records bundled alongside runes in API responses

use serde::{Deserialize, Serialize};

use super::Id;

/// Champion race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Race ID
    pub id: Id,

    /// Race name
    pub name: String,
}

/// Champion class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Class ID
    pub id: Id,

    /// Class name
    pub name: String,
}

/// Card artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist ID
    pub id: Id,

    /// Artist name
    pub name: String,
}

/// Card expansion, seeded by the init request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    /// Expansion ID; doubles as its position in the seeded list
    pub id: Id,

    /// Expansion name
    pub name: String,
}
