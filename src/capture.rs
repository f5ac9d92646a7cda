// Capture-trigger adapter - the context-menu "add single word" entry point
//
// Applies the capture length limit and performs one whole-store cycle.
// Rejected selections are silent no-ops toward the host.

use crate::storage::{load_store, save_store, StorageBackend};
use crate::store::{AddStatus, WordStoreError, CONTEXT_CAPTURE_MAX_CHARS};

/// Store the highlighted text delivered by the host's selection action.
///
/// Empty, over-length (128 chars), and already-stored selections are
/// rejected through the returned status without touching persisted state.
///
/// # Errors
/// Propagates load/persist failures; the host adapter decides whether to
/// surface or log them.
pub async fn capture_selection<B: StorageBackend>(
    backend: &B,
    selected_text: &str,
) -> Result<AddStatus, WordStoreError> {
    let mut store = load_store(backend).await?;

    let status = store.add(selected_text, CONTEXT_CAPTURE_MAX_CHARS);
    match status {
        AddStatus::Added => {
            save_store(backend, &store).await?;
            crate::debug!(
                "Captured selection ({} chars)",
                selected_text.trim().chars().count()
            );
        }
        AddStatus::DuplicateKey => crate::debug!("Selection already stored, skipping"),
        AddStatus::EmptyText | AddStatus::TooLong => {
            crate::debug!("Selection rejected: {:?}", status)
        }
    }

    Ok(status)
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod tests;
