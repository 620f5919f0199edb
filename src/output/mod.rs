//! Output formatting for CLI results

pub mod json;
pub mod label;
pub mod table;
pub mod text;
