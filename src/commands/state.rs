// Popup UI state - current page, search text, and filter mode
// Owned by the presentation layer; the store itself never tracks UI state.

use crate::query::FilterMode;

/// View state the popup threads through rendering calls
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    /// 1-based page currently displayed
    pub current_page: usize,
    /// Search box contents; empty matches everything
    pub search_text: String,
    /// Selected filter mode
    pub filter_mode: FilterMode,
}

impl Default for PopupState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_text: String::new(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl PopupState {
    /// Fresh state on the first page with no search
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance a page, stopping at the last page
    pub fn next_page(&mut self, page_count: usize) {
        if self.current_page < page_count {
            self.current_page += 1;
        }
    }

    /// Go back a page, stopping at the first
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
