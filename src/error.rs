use thiserror::Error;

/// Custom error types for ghostfill
#[derive(Debug, Error)]
pub enum GhostfillError {
    #[error("Cannot open {path}: {source}")]
    OpenFile {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
