//! Game text markup rendering
//!
//! Rune and ability descriptions embed `[label](target)` cross
//! references and `[label](*)` emphasis. Links render cyan and
//! underlined, emphasis renders bold.

use std::sync::OnceLock;

use colored::Colorize;
use regex::Regex;

/// A piece of parsed game text
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    /// Cross reference to another entity, e.g. `[Charge](/ability/12)`
    Link { label: String, target: String },
    /// Emphasized term, written `[label](*)` or `[label]*`
    Emphasis(String),
}

fn markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\](?:\(([^)]+)\)|\*)").expect("valid pattern"))
}

/// Split game text into plain, link, and emphasis spans.
pub fn parse(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in markup_re().captures_iter(text) {
        let all = caps.get(0).expect("capture 0 is the whole match");

        if all.start() > last {
            spans.push(Span::Text(text[last..all.start()].to_string()));
        }

        let label = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let span = match caps.get(2) {
            Some(target) if target.as_str() != "*" => Span::Link {
                label,
                target: target.as_str().to_string(),
            },
            _ => Span::Emphasis(label),
        };
        spans.push(span);

        last = all.end();
    }

    if last < text.len() {
        spans.push(Span::Text(text[last..].to_string()));
    }

    spans
}

/// Render game text for the terminal.
pub fn render(text: &str) -> String {
    parse(text)
        .into_iter()
        .map(|span| match span {
            Span::Text(text) => text,
            Span::Link { label, .. } => label.cyan().underline().to_string(),
            Span::Emphasis(label) => label.bold().to_string(),
        })
        .collect()
}

/// Render game text without styling, for table cells. Labels are kept,
/// targets and markup dropped.
pub fn plain(text: &str) -> String {
    parse(text)
        .into_iter()
        .map(|span| match span {
            Span::Text(text) => text,
            Span::Link { label, .. } => label,
            Span::Emphasis(label) => label,
        })
        .collect()
}
