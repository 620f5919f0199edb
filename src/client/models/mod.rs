//! PoxBase API data models
//!
//! Wire types for everything the API returns. Field names and tag
//! encodings mirror the server's camelCase JSON exactly; enums that
//! travel as ordinals get explicit `TryFrom`/`Into` conversions.

mod ability;
mod envelope;
mod enums;
mod rune;
mod search;
mod shim;

/// Numeric entity identifier, unique within an entity kind
pub type Id = u32;

// Re-export all models for convenient access
pub use ability::{Ability, AbilityGroup};
pub use envelope::Envelope;
pub use enums::{Faction, Rarity, Size};
pub use rune::{Champion, Equip, Relic, RuneCore, Spell};
pub use search::{SearchHit, SearchTarget, TypeaheadResponse};
pub use shim::{Artist, Class, Expansion, Race};
