//! Fuzzy query highlighting for typeahead results
//!
//! Query words match result names at word boundaries, with punctuation
//! and digits allowed between the letters. "khaan" therefore highlights
//! all of "Kha'an".

use regex::Regex;

/// A piece of a result name, marked when the query matched it
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Compiled matcher for one query string
#[derive(Debug)]
pub struct QueryMatcher {
    re: Option<Regex>,
}

impl QueryMatcher {
    /// Build a matcher from free-text input.
    ///
    /// The input is lowercased and stripped to letters and whitespace.
    /// Input with no letters left yields a matcher that highlights
    /// nothing.
    pub fn new(query: &str) -> Self {
        let cleaned: String = query
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();

        let alternatives: Vec<String> = cleaned
            .split_whitespace()
            .map(|word| {
                let letters: Vec<String> = word.chars().map(String::from).collect();
                format!(r"\b{}", letters.join(r"[^a-z\s]*"))
            })
            .collect();

        if alternatives.is_empty() {
            return Self { re: None };
        }

        let pattern = format!("(?i){}", alternatives.join("|"));

        // The pattern is assembled from plain letters and fixed classes,
        // so compilation failure leaves the matcher inert rather than
        // taking the search down.
        Self {
            re: Regex::new(&pattern).ok(),
        }
    }

    /// Split a result name into plain and matched segments.
    pub fn highlight(&self, name: &str) -> Vec<Segment> {
        let Some(re) = &self.re else {
            return vec![Segment::Plain(name.to_string())];
        };

        let mut segments = Vec::new();
        let mut remaining = name;

        while let Some(found) = re.find(remaining) {
            // A zero-length match cannot advance the scan.
            if found.range().is_empty() {
                break;
            }

            if found.start() > 0 {
                segments.push(Segment::Plain(remaining[..found.start()].to_string()));
            }
            segments.push(Segment::Match(found.as_str().to_string()));

            remaining = &remaining[found.end()..];
        }

        if !remaining.is_empty() {
            segments.push(Segment::Plain(remaining.to_string()));
        }

        segments
    }
}
