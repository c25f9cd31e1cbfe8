//! Document type schemas and the document model resolver.
//!
//! # Modules
//!
//! - [`schema`]: Document type, field and derivation definitions
//! - [`schema_set`]: Validated schema sets and path matching
//! - [`coerce`]: Raw value to declared type coercion
//! - [`derive`]: Computed-field derivations (slug, word count, reading time)
//! - [`resolver`]: The resolution pass
//! - [`blog`]: Built-in document types

#![doc = include_str!("../README.md")]

pub mod blog;
pub mod coerce;
pub mod derive;
pub mod document;
pub mod error;
pub mod resolver;
pub mod schema;
pub mod schema_set;
pub mod value;

pub use document::ResolvedDocument;
pub use error::ResolutionError;
pub use resolver::{Resolution, ResolveOutput, Resolver, resolve};
pub use schema::{
    ComputedField, ContentKind, Derivation, DocumentTypeSchema, FieldDescriptor, FieldType,
};
pub use schema_set::SchemaSet;
pub use value::{FieldValue, ReadingTime};
