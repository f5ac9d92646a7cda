// WordStore - capture, review, search, and export words and phrases
//
// `store` owns the persisted data model, `storage` supplies the
// asynchronous blob slot it lives in, and `capture`/`commands` are the two
// entry points a UI shell wires up: the context-menu capture action and
// the popup panel.

pub mod capture;
pub mod commands;
pub mod events;
pub mod export;
pub mod paths;
pub mod query;
pub mod storage;
pub mod store;

pub use capture::capture_selection;
pub use commands::{
    add_word_impl, export_csv_impl, remove_word_impl, rename_word_impl, render_page_impl,
    PageView, PopupState,
};
pub use events::{NullEventEmitter, WordStoreEventEmitter, WordStoreUpdatedPayload};
pub use export::{export_csv, CsvExport, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use query::{filter_entries, paginate, FilterMode, Page, DEFAULT_PAGE_SIZE};
pub use storage::{load_store, save_store, FileBackend, StorageBackend, StorageError};
pub use store::{
    normalize_key, AddStatus, RenameStatus, WordEntry, WordStore, WordStoreError,
    CONTEXT_CAPTURE_MAX_CHARS, POPUP_ENTRY_MAX_CHARS,
};

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
