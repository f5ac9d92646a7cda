// Popup adapter commands
// The shell (webview, extension popup, test harness) wires these to its
// UI; the logic itself is plain async Rust and fully tested.

mod logic;
mod state;

pub use logic::{
    add_word_impl, export_csv_impl, remove_word_impl, rename_word_impl, render_page_impl,
    PageView,
};
pub use state::PopupState;
