// Word store core - the ordered collection of captured words and phrases
// Mutations validate first and leave the store untouched on rejection;
// rejections are expected outcomes, not errors.

use serde::{Deserialize, Serialize};

/// Maximum accepted length, in characters, for text captured via the
/// context-menu entry point.
pub const CONTEXT_CAPTURE_MAX_CHARS: usize = 128;

/// Maximum accepted length, in characters, for text entered in the popup.
pub const POPUP_ENTRY_MAX_CHARS: usize = 1024;

/// One captured word or phrase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Trimmed, lower-cased form of the text; unique within the store
    pub key: String,
    /// Original-case captured text, trimmed
    pub text: String,
    /// Milliseconds since the Unix epoch, stamped when the entry was created
    pub added_at: i64,
}

/// Error types for store load/persist operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WordStoreError {
    /// Persisted data matched neither the current nor the legacy schema
    #[error("Unrecognized word store data: {0}")]
    MalformedStore(String),
    /// Failed to load the store
    #[error("Failed to load word store: {0}")]
    LoadError(String),
    /// Failed to persist the store
    #[error("Failed to persist word store: {0}")]
    PersistenceError(String),
}

/// Outcome of an `add` attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStatus {
    /// Entry appended to the store
    Added,
    /// Text was empty after trimming
    EmptyText,
    /// Text exceeded the caller's length limit
    TooLong,
    /// The case-folded key is already stored
    DuplicateKey,
}

impl AddStatus {
    /// Whether the attempt changed the store
    pub fn accepted(&self) -> bool {
        matches!(self, AddStatus::Added)
    }
}

/// Outcome of a `rename` attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// Old entry replaced; the new entry sits at the end of the order
    Updated,
    /// The new key belongs to a different existing entry
    Collision,
    /// Replacement text was empty after trimming
    EmptyText,
    /// Replacement text exceeded the popup length limit
    TooLong,
}

/// Store key for a piece of captured text
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Ordered collection of captured words, oldest first.
///
/// Insertion order is the display order. Renamed entries move to the end
/// because a rename is a delete plus an insert, not an in-place update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordStore {
    entries: Vec<WordEntry>,
}

impl WordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in store order
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its exact key
    pub fn get(&self, key: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Whether an entry with this exact key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Attempt to add a word or phrase.
    ///
    /// The text is trimmed, length-checked against `max_chars`, and keyed
    /// by its lower-cased form. Adding an already-stored key is an
    /// accepted no-op signalled by [`AddStatus::DuplicateKey`].
    #[must_use = "rejections are signalled through the returned status"]
    pub fn add(&mut self, raw_text: &str, max_chars: usize) -> AddStatus {
        let text = raw_text.trim();

        if text.is_empty() {
            return AddStatus::EmptyText;
        }

        if text.chars().count() > max_chars {
            return AddStatus::TooLong;
        }

        let key = text.to_lowercase();
        if self.contains_key(&key) {
            return AddStatus::DuplicateKey;
        }

        self.entries.push(WordEntry {
            key,
            text: text.to_string(),
            added_at: now_millis(),
        });
        AddStatus::Added
    }

    /// Remove the entry with this exact key.
    ///
    /// Returns whether an entry was removed; removing an absent key leaves
    /// the store unchanged.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|e| e.key == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the entry at `old_key` with freshly entered text.
    ///
    /// A successful rename removes the old entry and appends a new one
    /// stamped with the current time, so the renamed entry moves to the
    /// end of the display order. If the new text's key belongs to a
    /// different existing entry, the store is left unchanged and
    /// [`RenameStatus::Collision`] is returned.
    #[must_use = "rejections are signalled through the returned status"]
    pub fn rename(&mut self, old_key: &str, new_text: &str) -> RenameStatus {
        let text = new_text.trim();

        if text.is_empty() {
            return RenameStatus::EmptyText;
        }

        if text.chars().count() > POPUP_ENTRY_MAX_CHARS {
            return RenameStatus::TooLong;
        }

        let new_key = text.to_lowercase();
        if new_key != old_key && self.contains_key(&new_key) {
            return RenameStatus::Collision;
        }

        self.remove(old_key);
        self.entries.push(WordEntry {
            key: new_key,
            text: text.to_string(),
            added_at: now_millis(),
        });
        RenameStatus::Updated
    }

    /// Append an entry restored from persisted data.
    ///
    /// Keys are trusted to be unique within one persisted blob.
    pub(crate) fn push_restored(&mut self, entry: WordEntry) {
        self.entries.push(entry);
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
#[path = "word_store_test.rs"]
mod tests;
