//! Storage backend trait for the persisted word store blob.
//!
//! The store is persisted as one serialized blob under a single slot;
//! backends supply the asynchronous read/write of that slot so the store
//! layer stays decoupled from where the blob lives.

use async_trait::async_trait;

/// Error types for backend blob I/O
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// Reading the blob failed
    #[error("Failed to read stored data: {0}")]
    Read(String),
    /// Writing the blob failed
    #[error("Failed to write stored data: {0}")]
    Write(String),
}

/// Backend trait for persisted-blob access.
///
/// Implementations provide the actual storage slot. The primary
/// implementation is [`FileBackend`](super::FileBackend).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the persisted blob, or `None` when the slot has never been
    /// written.
    async fn read_blob(&self) -> Result<Option<String>, StorageError>;

    /// Replace the persisted blob as a single unit.
    async fn write_blob(&self, blob: &str) -> Result<(), StorageError>;
}
