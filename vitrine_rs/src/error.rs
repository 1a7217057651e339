//! Library error type.
//!
//! Content problems inside a valid document never show up here: the
//! assembler degrades and reports them as diagnostics. These are the
//! failures that stop a command outright.

use std::path::PathBuf;

use vitrine_sections::DocumentError;

use crate::validators::ValidationErrors;

/// Errors raised by `vitrine` library operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid content document {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
