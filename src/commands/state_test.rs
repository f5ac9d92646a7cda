// Tests for popup view state
// Test cases:
// - Starts on page 1 with no search and the contains filter
// - next_page stops at the page count; prev_page stops at 1
// - next_page with zero pages stays put

use super::*;

#[test]
fn test_default_state() {
    let state = PopupState::new();

    assert_eq!(state.current_page, 1);
    assert_eq!(state.search_text, "");
    assert_eq!(state.filter_mode, FilterMode::Contains);
}

#[test]
fn test_page_navigation_clamps_at_boundaries() {
    let mut state = PopupState::new();

    state.prev_page();
    assert_eq!(state.current_page, 1);

    state.next_page(3);
    state.next_page(3);
    assert_eq!(state.current_page, 3);

    state.next_page(3);
    assert_eq!(state.current_page, 3);

    state.prev_page();
    assert_eq!(state.current_page, 2);
}

#[test]
fn test_next_page_with_no_pages_stays_put() {
    let mut state = PopupState::new();

    state.next_page(0);

    assert_eq!(state.current_page, 1);
}
