//! Typeahead search
//!
//! Debounced sampling of the live input, staleness-checked application
//! of fetched results, keyboard selection with wraparound, and fuzzy
//! highlighting of query words in result names.

pub mod matcher;
pub mod overlay;
pub mod state;

// Re-export main types
pub use matcher::{QueryMatcher, Segment};
pub use overlay::{Overlay, OverlayCoordinator};
pub use state::{DEBOUNCE, Outcome, Sample, SearchBox};
