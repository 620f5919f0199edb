//! Typeahead hit display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::models::SearchHit;
use crate::output::label::LabelStyle;
use crate::search::{QueryMatcher, Segment};

/// Search hit summary row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SearchHitRow {
    /// Hit kind label
    #[tabled(rename = "KIND")]
    pub kind: String,

    /// Matched name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Rarity label ("--" for non-rune hits)
    #[tabled(rename = "RARITY")]
    pub rarity: String,
}

impl From<&SearchHit> for SearchHitRow {
    fn from(hit: &SearchHit) -> Self {
        Self {
            kind: hit.target.label().to_string(),
            name: hit.name.clone(),
            rarity: hit
                .rarity
                .map(|rarity| rarity.label().to_string())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<SearchHit> for SearchHitRow {
    fn from(hit: SearchHit) -> Self {
        SearchHitRow::from(&hit)
    }
}

/// Render a hit as one result line: the name painted by rarity with the
/// query's matches underlined, then a dimmed kind chip.
pub fn styled_hit(hit: &SearchHit, matcher: &QueryMatcher) -> String {
    let style = match hit.rarity {
        Some(rarity) => LabelStyle::Rarity(rarity),
        None => LabelStyle::Plain,
    };

    let mut line = String::new();
    for segment in matcher.highlight(&hit.name) {
        match segment {
            Segment::Plain(text) => line.push_str(&style.paint(&text).to_string()),
            Segment::Match(text) => line.push_str(&style.paint(&text).underline().to_string()),
        }
    }

    let chip = format!("({})", hit.target.label());
    line.push_str(&format!("  {}", chip.dimmed()));
    line
}
