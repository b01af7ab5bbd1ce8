use std::path::PathBuf;
use thiserror::Error;

/// Main error type for adix operations
#[derive(Error, Debug)]
pub enum AdixError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("malformed index entry at line {line}: {reason}")]
    MalformedIndexEntry { line: usize, reason: String },
}

/// Result type alias for adix operations
pub type Result<T> = std::result::Result<T, AdixError>;

impl AdixError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AdixError::Io {
            path: path.into(),
            source,
        }
    }

    /// Parse failures are recoverable in principle (a caller may choose to
    /// rebuild a corrupt index); IO failures are not.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            AdixError::MalformedRecord { .. } | AdixError::MalformedIndexEntry { .. }
        )
    }
}
