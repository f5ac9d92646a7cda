// Default on-disk location for the persisted store

use std::path::PathBuf;

/// Directory holding the persisted store file.
///
/// Resolves to `<platform config dir>/wordstore`.
pub fn get_config_dir() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("wordstore"))
        .ok_or_else(|| "No config directory available on this platform".to_string())
}
