// crates/engine/src/lib.rs
use std::path::Path;

pub mod error;
pub mod extract;
pub mod filesystem;
pub mod version;

use crate::error::{EngineError, Result};

/// Extract the LLVM version from the configuration file at `path`.
///
/// Reads the file, locates the first `set(LLVM_VERSION_{MAJOR,MINOR,PATCH}
/// <digits>)` occurrence for each field, and composes the dot-joined
/// version string.
///
/// # Errors
///
/// Returns `FileNotFound`/`FileRead` for path and IO failures, and
/// `Extraction` when one or more fields could not be matched. The
/// `Extraction` variant carries the partial result so callers can still
/// render the sentinel-filled string.
pub fn extract_version(path: &Path) -> Result<String> {
    let text = filesystem::read_config(path)?;
    let parts = extract::extract_parts(&text)?;

    if parts.is_complete() {
        Ok(parts.to_string())
    } else {
        Err(EngineError::Extraction { partial: parts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extract_version_success() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "set(LLVM_VERSION_MAJOR 18)\nset(LLVM_VERSION_MINOR 1)\nset(LLVM_VERSION_PATCH 0)\n"
        )
        .unwrap();

        assert_eq!(extract_version(file.path()).unwrap(), "18.1.0");
    }

    #[test]
    fn test_extract_version_partial_failure_keeps_matched_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "set(LLVM_VERSION_MAJOR 18)\n").unwrap();

        let err = extract_version(file.path()).unwrap_err();
        match err {
            EngineError::Extraction { partial } => {
                assert_eq!(partial.to_string(), "18.x.x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extract_version_missing_file() {
        let err = extract_version(Path::new("/does/not/exist")).unwrap_err();
        assert!(matches!(err, EngineError::FileNotFound(_)));
    }
}
