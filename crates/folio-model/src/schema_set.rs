//! A validated set of document type schemas.
//!
//! [`SchemaSet::new`] performs every check that can be made without
//! looking at documents. [`SchemaSet::check_paths`] covers the one check
//! that cannot: whether some concrete path falls under two patterns.

use std::collections::HashSet;

use folio_core::util::paths::strip_dir_prefix;
use folio_core::{Error, Result};
use glob::{MatchOptions, Pattern};

use crate::error::ResolutionError;
use crate::schema::DocumentTypeSchema;

/// Keys a resolved document already uses for itself.
const RESERVED_KEYS: [&str; 3] = ["_id", "type", "body"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Clone, Debug)]
struct CompiledSchema {
    schema: DocumentTypeSchema,
    pattern: Pattern,
}

/// Immutable schemas for one resolution pass.
#[derive(Clone, Debug)]
pub struct SchemaSet {
    content_dir: String,
    schemas: Vec<CompiledSchema>,
}

impl SchemaSet {
    /// Validate and compile `schemas`.
    ///
    /// `content_dir` is the `/`-separated directory document paths start
    /// with; it is stripped before patterns are matched. Use `""` when
    /// paths are already relative to the content directory.
    ///
    /// # Errors
    ///
    /// [`Error::Schema`] when two schemas share a name or an identical
    /// pattern, a pattern is not a valid glob, a schema declares a field
    /// or computed field twice, or a computed field shares its name with
    /// a declared field.
    pub fn new(content_dir: impl Into<String>, schemas: Vec<DocumentTypeSchema>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut patterns = HashSet::new();
        let mut compiled = Vec::with_capacity(schemas.len());

        for schema in schemas {
            if schema.name.is_empty() {
                return Err(Error::schema("document type with an empty name"));
            }
            if !names.insert(schema.name.clone()) {
                return Err(Error::schema(format!(
                    "document type `{}` is defined more than once",
                    schema.name
                )));
            }
            if !patterns.insert(schema.file_path_pattern.clone()) {
                return Err(Error::schema(format!(
                    "document type `{}` reuses file path pattern `{}`",
                    schema.name, schema.file_path_pattern
                )));
            }
            validate_keys(&schema)?;

            let pattern = Pattern::new(&schema.file_path_pattern).map_err(|e| {
                Error::schema(format!(
                    "document type `{}` has invalid file path pattern `{}`: {e}",
                    schema.name, schema.file_path_pattern
                ))
            })?;
            compiled.push(CompiledSchema { schema, pattern });
        }

        Ok(Self {
            content_dir: content_dir.into(),
            schemas: compiled,
        })
    }

    pub fn content_dir(&self) -> &str {
        &self.content_dir
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Schemas in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentTypeSchema> {
        self.schemas.iter().map(|c| &c.schema)
    }

    pub fn get(&self, name: &str) -> Option<&DocumentTypeSchema> {
        self.iter().find(|s| s.name == name)
    }

    /// Every schema whose pattern matches `path`, in definition order.
    pub fn matching(&self, path: &str) -> Vec<&DocumentTypeSchema> {
        let relative = strip_dir_prefix(path, &self.content_dir);
        self.schemas
            .iter()
            .filter(|c| c.pattern.matches_with(relative, MATCH_OPTIONS))
            .map(|c| &c.schema)
            .collect()
    }

    /// Report every path that matches more than one schema.
    ///
    /// Intended to run once before a pass so that an ambiguous
    /// configuration is rejected before anything is resolved.
    pub fn check_paths<'a, I>(&self, paths: I) -> Vec<ResolutionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths
            .into_iter()
            .filter_map(|path| {
                let matched = self.matching(path);
                (matched.len() > 1).then(|| ResolutionError::AmbiguousSchema {
                    path: path.to_string(),
                    schemas: matched.iter().map(|s| s.name.clone()).collect(),
                })
            })
            .collect()
    }
}

fn validate_keys(schema: &DocumentTypeSchema) -> Result<()> {
    let reserved = schema
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .chain(schema.computed_fields.iter().map(|c| c.name.as_str()))
        .find(|name| RESERVED_KEYS.contains(name));
    if let Some(name) = reserved {
        return Err(Error::schema(format!(
            "document type `{}` uses reserved field name `{name}`",
            schema.name
        )));
    }

    let mut declared = HashSet::new();
    for field in &schema.fields {
        if !declared.insert(field.name.as_str()) {
            return Err(Error::schema(format!(
                "document type `{}` declares field `{}` more than once",
                schema.name, field.name
            )));
        }
    }

    let mut computed = HashSet::new();
    for field in &schema.computed_fields {
        if declared.contains(field.name.as_str()) {
            return Err(Error::schema(format!(
                "document type `{}`: computed field `{}` collides with a declared field",
                schema.name, field.name
            )));
        }
        if !computed.insert(field.name.as_str()) {
            return Err(Error::schema(format!(
                "document type `{}` computes field `{}` more than once",
                schema.name, field.name
            )));
        }
    }
    Ok(())
}
