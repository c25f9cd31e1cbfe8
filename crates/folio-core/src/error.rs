//! Error types for Folio operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Folio crates. Uses `thiserror` for derive macros.
//!
//! Per-document resolution failures are *not* represented here: they are
//! values in the resolver's output (see `folio_model::ResolutionError`).
//! This type covers failures that stop an operation outright.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error tied to a specific file or directory.
    #[error("I/O error at {}: {source}", .path.display())]
    IoWithPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("Failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Source text could not be parsed (front-matter, YAML).
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A document type schema, or a set of them, is invalid.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Content failed to load or resolve.
    #[error("Content error: {0}")]
    Content(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a parse error for the source at `path`.
    pub fn parse(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a schema definition error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a content error.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Wrap an I/O error with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a directory traversal error.
    pub fn walk(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Walk {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Whether this error means something was missing rather than broken.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::IoWithPath { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("missing content dir");
        assert_eq!(err.to_string(), "Configuration error: missing content dir");
    }

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("data/articles/a.mdx", "unterminated front-matter");
        assert_eq!(
            err.to_string(),
            "Parse error in data/articles/a.mdx: unterminated front-matter"
        );
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(io, "/tmp/missing.mdx");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.mdx"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::io_with_path(io, "/x").is_not_found());
        assert!(!Error::schema("bad").is_not_found());
    }
}
