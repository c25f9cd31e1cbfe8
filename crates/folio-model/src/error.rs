//! Per-document resolution failures.
//!
//! These are values in a resolution pass's output, not control flow: one
//! failing document never stops its siblings from resolving.

use serde::Serialize;
use thiserror::Error;

use crate::schema::FieldType;

/// Why a single document produced no record.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolutionError {
    /// The document path matches more than one schema's pattern.
    #[error("{path}: matches more than one document type ({})", .schemas.join(", "))]
    AmbiguousSchema { path: String, schemas: Vec<String> },

    /// A required field is absent or null.
    #[error("{path}: missing required field `{field}`")]
    MissingRequiredField { field: String, path: String },

    /// A field value cannot be coerced to its declared type.
    #[error("{path}: field `{field}` expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: String,
        path: String,
    },
}

impl ResolutionError {
    /// Path of the document this error belongs to.
    pub fn path(&self) -> &str {
        match self {
            Self::AmbiguousSchema { path, .. }
            | Self::MissingRequiredField { path, .. }
            | Self::TypeMismatch { path, .. } => path,
        }
    }

    /// The offending field, if the error is about one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::AmbiguousSchema { .. } => None,
            Self::MissingRequiredField { field, .. } | Self::TypeMismatch { field, .. } => {
                Some(field)
            }
        }
    }
}
