use crate::error::{EngineError, Result};
use std::path::Path;

/// Read the whole configuration file as text.
///
/// # Errors
///
/// Returns `FileNotFound` if `path` does not exist, and `FileRead` if it
/// exists but cannot be read as UTF-8 text.
pub fn read_config(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EngineError::FileNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
