//! Front-matter extraction and raw document loading.
//!
//! This crate is the input side of a resolution pass: it produces the
//! immutable [`RawDocument`] snapshots that `folio-model` resolves.
//!
//! # Modules
//!
//! - [`value`]: The tagged [`RawValue`] front-matter value
//! - [`frontmatter`]: Splitting and parsing the `---` block
//! - [`document`]: The [`RawDocument`] snapshot
//! - [`source`]: Discovering and loading a content directory

#![doc = include_str!("../README.md")]

pub mod document;
pub mod frontmatter;
pub mod source;
pub mod value;

pub use document::{Frontmatter, RawDocument};
pub use frontmatter::{parse_frontmatter, split_frontmatter};
pub use source::{ContentSource, LoadFailure, LoadOutput};
pub use value::RawValue;
