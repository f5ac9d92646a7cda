// Popup command logic - testable functions separate from any UI wrapper
//
// Each mutation is one whole-store cycle: load the blob, apply the change,
// write the blob back. Rejections leave persisted state untouched and are
// reported through the returned status.

use serde::Serialize;

use crate::events::{WordStoreEventEmitter, WordStoreUpdatedPayload};
use crate::export::{export_csv, CsvExport};
use crate::query::{filter_entries, paginate, DEFAULT_PAGE_SIZE};
use crate::storage::{load_store, save_store, StorageBackend};
use crate::store::{normalize_key, AddStatus, RenameStatus, WordEntry, POPUP_ENTRY_MAX_CHARS};

use super::state::PopupState;

/// One rendered page of the popup body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Entries on the current page, oldest first
    pub words: Vec<WordEntry>,
    /// 1-based page this view shows
    pub current_page: usize,
    /// Total pages for the current search; 0 with no matches
    pub page_count: usize,
    /// Entries matching the current search across all pages
    pub match_count: usize,
    /// Entries in the store regardless of search, for the stored-count tooltip
    pub total_stored: usize,
}

impl PageView {
    /// Whether the store holds nothing at all (drives the placeholder text)
    pub fn store_is_empty(&self) -> bool {
        self.total_stored == 0
    }
}

/// Implementation of the popup add action (1024-char limit).
///
/// Persists and emits `wordstore_updated` only when the text is accepted.
///
/// # Errors
/// Returns an error string when the store cannot be loaded or persisted.
pub async fn add_word_impl<B, E>(
    backend: &B,
    emitter: &E,
    raw_text: &str,
) -> Result<AddStatus, String>
where
    B: StorageBackend,
    E: WordStoreEventEmitter,
{
    let mut store = load_store(backend).await.map_err(|e| e.to_string())?;

    let status = store.add(raw_text, POPUP_ENTRY_MAX_CHARS);
    if status.accepted() {
        save_store(backend, &store).await.map_err(|e| e.to_string())?;

        let key = normalize_key(raw_text);
        emitter.emit_wordstore_updated(WordStoreUpdatedPayload {
            action: "add".to_string(),
            entry_key: key.clone(),
        });
        crate::info!("Added word with key '{}'", key);
    }

    Ok(status)
}

/// Implementation of the popup remove action.
///
/// # Returns
/// Whether an entry was removed; removing an absent key is a no-op.
///
/// # Errors
/// Returns an error string when the store cannot be loaded or persisted.
pub async fn remove_word_impl<B, E>(backend: &B, emitter: &E, key: &str) -> Result<bool, String>
where
    B: StorageBackend,
    E: WordStoreEventEmitter,
{
    let mut store = load_store(backend).await.map_err(|e| e.to_string())?;

    let removed = store.remove(key);
    if removed {
        save_store(backend, &store).await.map_err(|e| e.to_string())?;

        emitter.emit_wordstore_updated(WordStoreUpdatedPayload {
            action: "remove".to_string(),
            entry_key: key.to_string(),
        });
        crate::info!("Removed word with key '{}'", key);
    }

    Ok(removed)
}

/// Implementation of the popup inline-edit action.
///
/// On [`RenameStatus::Updated`] the change is persisted and announced; on
/// any rejection the caller simply redisplays the unchanged entry.
///
/// # Errors
/// Returns an error string when the store cannot be loaded or persisted.
pub async fn rename_word_impl<B, E>(
    backend: &B,
    emitter: &E,
    old_key: &str,
    new_text: &str,
) -> Result<RenameStatus, String>
where
    B: StorageBackend,
    E: WordStoreEventEmitter,
{
    let mut store = load_store(backend).await.map_err(|e| e.to_string())?;

    let status = store.rename(old_key, new_text);
    if status == RenameStatus::Updated {
        save_store(backend, &store).await.map_err(|e| e.to_string())?;

        let new_key = normalize_key(new_text);
        emitter.emit_wordstore_updated(WordStoreUpdatedPayload {
            action: "rename".to_string(),
            entry_key: new_key.clone(),
        });
        crate::info!("Renamed '{}' to '{}'", old_key, new_key);
    }

    Ok(status)
}

/// Implementation of popup body rendering: list, filter, then paginate.
///
/// The page count is computed from the filtered sequence, so search
/// results paginate correctly.
///
/// # Errors
/// Returns an error string when the store cannot be loaded.
pub async fn render_page_impl<B: StorageBackend>(
    backend: &B,
    state: &PopupState,
) -> Result<PageView, String> {
    let store = load_store(backend).await.map_err(|e| e.to_string())?;

    let matches = filter_entries(store.entries(), &state.search_text, state.filter_mode);
    let page = paginate(&matches, state.current_page, DEFAULT_PAGE_SIZE);

    Ok(PageView {
        words: page.items.into_iter().cloned().collect(),
        current_page: page.current_page,
        page_count: page.page_count,
        match_count: matches.len(),
        total_stored: store.len(),
    })
}

/// Implementation of CSV export.
///
/// Returns `None` for an empty store so the shell skips the download.
///
/// # Errors
/// Returns an error string when the store cannot be loaded.
pub async fn export_csv_impl<B: StorageBackend>(
    backend: &B,
) -> Result<Option<CsvExport>, String> {
    let store = load_store(backend).await.map_err(|e| e.to_string())?;
    Ok(export_csv(&store))
}

#[cfg(test)]
#[path = "logic_test.rs"]
mod tests;
