// Persisted-blob codec for the word store
//
// The blob is a JSON object mapping each key to a `[text, addedAt]` pair
// in store order. An older format stored plain string values; those decode
// through the legacy variant and are stamped with the migration time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::word_store::{WordEntry, WordStore, WordStoreError};

/// One persisted value, decoded by shape.
///
/// Everything outside this codec sees only [`WordEntry`]; the legacy
/// shape is normalized away immediately after decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
enum PersistedEntry {
    /// Current shape: `[text, addedAt]`
    Versioned(String, i64),
    /// Legacy shape: plain text, no timestamp
    Legacy(String),
}

/// A decoded blob plus whether legacy entries were rewritten
#[derive(Debug)]
pub struct BlobContents {
    pub store: WordStore,
    /// True when at least one legacy-shaped value was normalized
    pub migrated: bool,
}

/// Decode a persisted blob in either the current or the legacy shape.
///
/// Legacy values are stamped with `migration_time`. A blob that parses as
/// neither shape is a fatal [`WordStoreError::MalformedStore`]; stored
/// words are never silently discarded.
pub fn parse_blob(blob: &str, migration_time: i64) -> Result<BlobContents, WordStoreError> {
    let map: Map<String, Value> =
        serde_json::from_str(blob).map_err(|e| WordStoreError::MalformedStore(e.to_string()))?;

    let mut store = WordStore::new();
    let mut migrated = false;

    for (key, value) in map {
        let entry = serde_json::from_value::<PersistedEntry>(value).map_err(|_| {
            WordStoreError::MalformedStore(format!("unrecognized value shape for key '{}'", key))
        })?;

        match entry {
            PersistedEntry::Versioned(text, added_at) => {
                store.push_restored(WordEntry { key, text, added_at });
            }
            PersistedEntry::Legacy(text) => {
                migrated = true;
                store.push_restored(WordEntry {
                    key,
                    text,
                    added_at: migration_time,
                });
            }
        }
    }

    Ok(BlobContents { store, migrated })
}

/// Serialize the store to its persisted JSON object form, in store order.
pub fn to_blob(store: &WordStore) -> Result<String, WordStoreError> {
    let mut map = Map::with_capacity(store.len());
    for entry in store.entries() {
        let value =
            serde_json::to_value(PersistedEntry::Versioned(entry.text.clone(), entry.added_at))
                .map_err(|e| WordStoreError::PersistenceError(e.to_string()))?;
        map.insert(entry.key.clone(), value);
    }

    serde_json::to_string(&map).map_err(|e| WordStoreError::PersistenceError(e.to_string()))
}

#[cfg(test)]
#[path = "persist_test.rs"]
mod tests;
