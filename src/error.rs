use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lindex operations
#[derive(Error, Debug)]
pub enum LindexError {
    #[error("failed to read corpus {path}: {source}")]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown matching strategy '{0}' (expected ALL, ANY or NONE)")]
    UnknownStrategy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lindex operations
pub type Result<T> = std::result::Result<T, LindexError>;

impl LindexError {
    /// Check if the interactive session can continue after this error.
    ///
    /// Load failures are fatal (there is no index to query); everything
    /// else is user input and the menu loop recovers from it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LindexError::UnknownStrategy(_))
    }
}
