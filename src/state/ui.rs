#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll offset past which the navbar condenses.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Page chrome state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    pub scrolled: bool,
}

impl UiState {
    /// Recompute `scrolled` for a window offset. Returns `true` if it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
