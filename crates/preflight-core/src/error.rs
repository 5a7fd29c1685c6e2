//! Error taxonomy for loading validation inputs.
//!
//! The rules and assemblers are total and never produce these; only the
//! snapshot loading boundary in [`crate::input`] does.

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for Preflight input operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
