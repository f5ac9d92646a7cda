// Store mutation events for shell notification
// Defines event payloads and an emission trait for testability

use serde::Serialize;

/// Event names as constants for consistency
pub mod wordstore_events {
    pub const WORDSTORE_UPDATED: &str = "wordstore_updated";
}

/// Payload for the wordstore_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordStoreUpdatedPayload {
    /// Type of mutation: "add", "remove", or "rename"
    pub action: String,
    /// Key of the affected entry; for renames, the new key
    pub entry_key: String,
}

/// Trait for emitting word-store events
/// Allows mocking in tests while the shell provides the real transport
pub trait WordStoreEventEmitter: Send + Sync {
    /// Emit wordstore_updated
    fn emit_wordstore_updated(&self, payload: WordStoreUpdatedPayload);
}

/// Emitter that drops every event, for shells that do not listen
#[derive(Debug, Default, Clone)]
pub struct NullEventEmitter;

impl WordStoreEventEmitter for NullEventEmitter {
    fn emit_wordstore_updated(&self, _payload: WordStoreUpdatedPayload) {}
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
