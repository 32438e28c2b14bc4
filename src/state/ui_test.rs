use super::*;

#[test]
fn ui_state_default_not_scrolled() {
    assert!(!UiState::default().scrolled);
}

#[test]
fn observe_scroll_flips_past_threshold() {
    let mut ui = UiState::default();
    assert!(!ui.observe_scroll(50.0));
    assert!(!ui.scrolled);
    assert!(ui.observe_scroll(50.5));
    assert!(ui.scrolled);
}

#[test]
fn observe_scroll_reports_only_changes() {
    let mut ui = UiState::default();
    ui.observe_scroll(300.0);
    assert!(!ui.observe_scroll(400.0));
    assert!(ui.observe_scroll(0.0));
    assert!(!ui.scrolled);
}
