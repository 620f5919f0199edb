//! Display model implementations for table, JSON, and card output
//!
//! Display models transform cached entities into CLI-friendly shapes
//! with appropriate column names and serialization.

mod ability;
mod common;
mod expansion;
mod faction;
mod rune;
mod search;

pub use ability::{AbilityGroupDetail, AbilityRankRow};
pub use common::truncate;
pub use expansion::ExpansionRow;
pub use faction::FactionRow;
pub use rune::{AbilityChip, ChampionData, KindData, RuneKind, RuneRow, RuneSheet};
pub use search::{SearchHitRow, styled_hit};
