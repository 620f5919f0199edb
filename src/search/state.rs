//! Typeahead search box state
//!
//! The search box never queries on the keystroke itself. The live input
//! is sampled after a settle delay, and only a changed, non-empty value
//! triggers a fetch. Results are applied only when the query they were
//! fetched for is still the current one.

use std::time::Duration;

use crate::client::models::SearchHit;
use crate::search::matcher::QueryMatcher;
use crate::search::overlay::{Overlay, OverlayCoordinator};

/// Keystroke settle time before the live input is sampled
pub const DEBOUNCE: Duration = Duration::from_millis(50);

/// What a sample of the live input calls for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    /// Input still matches the committed query; nothing to do
    Unchanged,
    /// Input was emptied; the panel is hidden and no fetch runs
    Cleared,
    /// Input changed; fetch with this query snapshot
    Fetch(String),
}

/// What happened when fetched results were offered back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The query moved on while the fetch ran; results were dropped
    Stale,
    /// Results replaced the previous list
    Updated,
}

/// State behind the typeahead input
#[derive(Default)]
pub struct SearchBox {
    query: String,

    results: Vec<SearchHit>,

    selected: Option<usize>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the live input after the settle delay.
    ///
    /// Commits the input as the current query. An emptied input hides
    /// the panel but keeps the previous results around.
    pub fn sample(&mut self, live: &str, overlays: &mut OverlayCoordinator) -> Sample {
        if self.query == live {
            // Nothing to do
            return Sample::Unchanged;
        }

        self.query = live.to_string();

        if self.query.is_empty() {
            overlays.hide(Overlay::Typeahead);
            return Sample::Cleared;
        }

        Sample::Fetch(self.query.clone())
    }

    /// Offer fetched results back, tagged with the query they answer.
    ///
    /// Results for a query that is no longer current are dropped. Fresh
    /// results clear the selection and show the panel, or hide it when
    /// the list is empty.
    pub fn apply_results(
        &mut self,
        snapshot: &str,
        hits: Vec<SearchHit>,
        overlays: &mut OverlayCoordinator,
    ) -> Outcome {
        if self.query != snapshot {
            // A newer query was committed while we waited
            return Outcome::Stale;
        }

        self.results = hits;
        self.selected = None;

        if self.results.is_empty() {
            overlays.hide(Overlay::Typeahead);
        } else {
            overlays.display(Overlay::Typeahead);
        }

        Outcome::Updated
    }

    /// Move the selection by one step in either direction.
    ///
    /// On a hidden panel the key reopens it instead of moving. The
    /// selection cycles through a "nothing selected" position between
    /// the last and first result.
    pub fn step(&mut self, delta: i32, overlays: &mut OverlayCoordinator) {
        if !overlays.is_visible(Overlay::Typeahead) {
            self.show(overlays);
            return;
        }

        let len = self.results.len() as i32;
        let mut sel = self.selected.map(|s| s as i32).unwrap_or(-1) + delta;

        if sel >= len {
            sel = -1;
        } else if sel < -1 {
            sel = len - 1;
        }

        self.selected = usize::try_from(sel).ok();
    }

    /// Hide the panel and drop the selection. Results stay around.
    pub fn escape(&mut self, overlays: &mut OverlayCoordinator) {
        overlays.hide(Overlay::Typeahead);
        self.selected = None;
    }

    /// Hide the panel and yield the selected hit, if any.
    pub fn enter(&mut self, overlays: &mut OverlayCoordinator) -> Option<&SearchHit> {
        overlays.hide(Overlay::Typeahead);
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Show the panel again, but only when there is something to show.
    pub fn show(&self, overlays: &mut OverlayCoordinator) {
        if !self.results.is_empty() {
            overlays.display(Overlay::Typeahead);
        }
    }

    /// The committed query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current result list.
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Index of the selected result, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Matcher for highlighting the committed query in result names.
    pub fn matcher(&self) -> QueryMatcher {
        QueryMatcher::new(&self.query)
    }
}
