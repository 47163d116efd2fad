use crate::version::VersionParts;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File `{}` is not found", .0.display())]
    FileNotFound(std::path::PathBuf),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to extract an LLVM version from CMakeLists.txt")]
    Extraction { partial: VersionParts },
}

pub type Result<T> = std::result::Result<T, EngineError>;
