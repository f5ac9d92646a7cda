//! Asynchronous persistence for the word store.
//!
//! Every mutation elsewhere in the crate is a whole-store cycle: read the
//! blob, apply one change, write the blob back. `load_store` and
//! `save_store` are the two halves of that cycle; [`StorageBackend`]
//! supplies the slot the blob lives in. There is no cross-context locking;
//! concurrent writers are last-write-wins.

mod file;
mod traits;

pub use file::FileBackend;
pub use traits::{StorageBackend, StorageError};

use crate::store::{self, WordStore, WordStoreError};

/// Load the store from a backend.
///
/// An absent blob yields an empty store. A legacy-shaped blob is migrated,
/// written back once, and returned; a failed write-back is logged rather
/// than failing the load. A blob matching neither schema propagates
/// [`WordStoreError::MalformedStore`].
pub async fn load_store<B: StorageBackend>(backend: &B) -> Result<WordStore, WordStoreError> {
    let blob = match backend.read_blob().await {
        Ok(blob) => blob,
        Err(e) => return Err(WordStoreError::LoadError(e.to_string())),
    };

    let Some(blob) = blob else {
        crate::debug!("No stored words found, starting with an empty store");
        return Ok(WordStore::new());
    };

    let contents = store::parse_blob(&blob, store::now_millis())?;

    if contents.migrated {
        crate::info!(
            "Migrated legacy word store format ({} entries)",
            contents.store.len()
        );
        if let Err(e) = save_store(backend, &contents.store).await {
            crate::warn!("Failed to persist migrated store, continuing in memory: {}", e);
        }
    }

    Ok(contents.store)
}

/// Serialize and persist the whole store as a single blob swap.
pub async fn save_store<B: StorageBackend>(
    backend: &B,
    store: &WordStore,
) -> Result<(), WordStoreError> {
    let blob = store::to_blob(store)?;
    backend
        .write_blob(&blob)
        .await
        .map_err(|e| WordStoreError::PersistenceError(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
