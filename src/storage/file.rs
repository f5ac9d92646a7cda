// File-backed storage slot - persists the blob with an atomic
// temp file + rename swap

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use super::traits::{StorageBackend, StorageError};

/// Storage backend keeping the blob in a single file on disk
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend storing the blob at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a backend using the default config location
    pub fn with_default_path() -> Result<Self, StorageError> {
        let config_dir = crate::paths::get_config_dir().map_err(|e| {
            StorageError::Read(format!("Could not determine config directory: {}", e))
        })?;
        Ok(Self::new(config_dir.join("wordstore.json")))
    }

    /// Path the blob is stored at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn read_blob(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }

    async fn write_blob(&self, blob: &str) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
        }

        // Use atomic temp file + rename pattern
        let temp_path = self.path.with_extension("tmp");

        // Write to temp file with explicit sync
        {
            let mut file = File::create(&temp_path)
                .await
                .map_err(|e| StorageError::Write(format!("Failed to create temp file: {}", e)))?;
            file.write_all(blob.as_bytes())
                .await
                .map_err(|e| StorageError::Write(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .await
                .map_err(|e| StorageError::Write(format!("Failed to sync: {}", e)))?;
        } // File closed here

        // Atomic rename
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            // Clean up temp file on error
            let _ = std::fs::remove_file(&temp_path);
            StorageError::Write(format!("Failed to rename: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
