//! Closed enumerations shared across rune kinds

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Id;

/// Rune rarity, serialized as its ordinal on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Exotic = 3,
    Limited = 4,
    Legendary = 5,
}

impl Rarity {
    /// Display label for the rarity chip
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Exotic => "Exotic",
            Rarity::Limited => "Limited",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Rarity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rarity::Common),
            1 => Ok(Rarity::Uncommon),
            2 => Ok(Rarity::Rare),
            3 => Ok(Rarity::Exotic),
            4 => Ok(Rarity::Limited),
            5 => Ok(Rarity::Legendary),
            other => Err(format!("unknown rarity ordinal {}", other)),
        }
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> u8 {
        rarity as u8
    }
}

/// One of the eight faction affiliations, serialized as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Faction {
    SavageTundra = 0,
    IronfistStronghold = 1,
    KthirForest = 2,
    ForglarSwamp = 3,
    ShatteredPeaks = 4,
    SunderedLands = 5,
    Underdepths = 6,
    ForsakenWastes = 7,
}

impl Faction {
    /// All factions in ordinal order
    pub const ALL: [Faction; 8] = [
        Faction::SavageTundra,
        Faction::IronfistStronghold,
        Faction::KthirForest,
        Faction::ForglarSwamp,
        Faction::ShatteredPeaks,
        Faction::SunderedLands,
        Faction::Underdepths,
        Faction::ForsakenWastes,
    ];

    /// Two-letter code used in routes and asset names
    pub fn short(&self) -> &'static str {
        match self {
            Faction::SavageTundra => "st",
            Faction::IronfistStronghold => "is",
            Faction::KthirForest => "kf",
            Faction::ForglarSwamp => "fs",
            Faction::ShatteredPeaks => "sp",
            Faction::SunderedLands => "sl",
            Faction::Underdepths => "ud",
            Faction::ForsakenWastes => "fw",
        }
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Faction::SavageTundra => "Savage Tundra",
            Faction::IronfistStronghold => "Ironfist Stronghold",
            Faction::KthirForest => "K'thir Forest",
            Faction::ForglarSwamp => "Forglar Swamp",
            Faction::ShatteredPeaks => "Shattered Peaks",
            Faction::SunderedLands => "Sundered Lands",
            Faction::Underdepths => "Underdepths",
            Faction::ForsakenWastes => "Forsaken Wastes",
        }
    }

    /// Look up a faction by its ordinal ID
    pub fn from_id(id: Id) -> Option<Faction> {
        u8::try_from(id).ok().and_then(|n| Faction::try_from(n).ok())
    }

    /// Look up a faction by its two-letter code
    pub fn from_short(code: &str) -> Option<Faction> {
        Faction::ALL.iter().copied().find(|f| f.short() == code)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Faction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Faction::SavageTundra),
            1 => Ok(Faction::IronfistStronghold),
            2 => Ok(Faction::KthirForest),
            3 => Ok(Faction::ForglarSwamp),
            4 => Ok(Faction::ShatteredPeaks),
            5 => Ok(Faction::SunderedLands),
            6 => Ok(Faction::Underdepths),
            7 => Ok(Faction::ForsakenWastes),
            other => Err(format!("unknown faction ordinal {}", other)),
        }
    }
}

impl From<Faction> for u8 {
    fn from(faction: Faction) -> u8 {
        faction as u8
    }
}

/// Board footprint of a champion or relic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "1x1")]
    OneByOne,
    #[serde(rename = "2x2")]
    TwoByTwo,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::OneByOne => f.write_str("1x1"),
            Size::TwoByTwo => f.write_str("2x2"),
        }
    }
}
