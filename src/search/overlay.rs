//! Exclusive overlay panels
//!
//! At most one overlay is shown at a time: showing one hides whatever
//! else was showing, and a dismissal hides everything.

/// The overlay panels the browse screen can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Typeahead,
    Expansions,
    Factions,
}

/// Tracks which overlay, if any, is currently shown
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    displayed: Option<Overlay>,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an overlay, hiding any other.
    pub fn display(&mut self, overlay: Overlay) {
        self.displayed = Some(overlay);
    }

    /// Hide the overlay if it is the one shown.
    pub fn hide(&mut self, overlay: Overlay) {
        if self.displayed == Some(overlay) {
            self.displayed = None;
        }
    }

    /// Toggle an overlay, hiding any other. Returns whether it is now shown.
    pub fn toggle(&mut self, overlay: Overlay) -> bool {
        if self.displayed == Some(overlay) {
            self.displayed = None;
            false
        } else {
            self.displayed = Some(overlay);
            true
        }
    }

    /// Hide whatever is shown.
    pub fn dismiss(&mut self) {
        self.displayed = None;
    }

    /// Whether the given overlay is the one shown.
    pub fn is_visible(&self, overlay: Overlay) -> bool {
        self.displayed == Some(overlay)
    }

    /// The overlay currently shown, if any.
    pub fn displayed(&self) -> Option<Overlay> {
        self.displayed
    }
}
