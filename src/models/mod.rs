//! Display models for CLI output
//!
//! This module provides the display-side shapes for converting cached
//! entities into table rows, JSON payloads, and rendered card faces.

pub mod display;

pub use display::{
    AbilityGroupDetail, AbilityRankRow, ExpansionRow, FactionRow, RuneRow, RuneSheet,
    SearchHitRow,
};
