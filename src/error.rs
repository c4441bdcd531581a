//! Error types for AMF document loading and view model computation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading an AMF document or selecting a shape in it.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Selection errors (exit code 2)
    #[error("JSON pointer does not resolve: {pointer}")]
    PointerNotFound { pointer: String },

    #[error("no node with @id {id} in the document")]
    NodeNotFound { id: String },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}

/// Errors during view model computation.
///
/// Missing edges never fail a computation; they leave fields unset.
#[derive(Debug, Error)]
pub enum ViewModelError {
    #[error(
        "nested properties exceed the maximum depth of {depth} (at {})",
        name.as_deref().unwrap_or("<unnamed>")
    )]
    MaxDepthExceeded { depth: usize, name: Option<String> },
}

impl ViewModelError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewModelError::MaxDepthExceeded { .. } => 2,
        }
    }
}
