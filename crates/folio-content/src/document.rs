//! The raw document snapshot.

use std::collections::BTreeMap;

use folio_core::Result;
use serde::Serialize;

use crate::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::value::RawValue;

/// Front-matter field name to author-supplied value.
pub type Frontmatter = BTreeMap<String, RawValue>;

/// An immutable snapshot of one source file, taken once per resolution
/// pass.
///
/// `path` is `/`-separated and includes the content directory, e.g.
/// `data/articles/my-post.mdx`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawDocument {
    path: String,
    body: String,
    fields: Frontmatter,
}

impl RawDocument {
    /// Create a document from already separated parts.
    pub fn new(path: impl Into<String>, body: impl Into<String>, fields: Frontmatter) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            fields,
        }
    }

    /// Build a document from the full source text of a file.
    ///
    /// # Errors
    ///
    /// Returns [`folio_core::Error::Parse`] if the front-matter block is
    /// unterminated or is not a YAML mapping.
    pub fn from_source(path: impl Into<String>, text: &str) -> Result<Self> {
        let path = path.into();
        let (frontmatter, body) = split_frontmatter(&path, text)?;
        let fields = match frontmatter {
            Some(block) => parse_frontmatter(&path, block)?,
            None => Frontmatter::new(),
        };
        Ok(Self::new(path, body, fields))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw body text after the front-matter block.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn fields(&self) -> &Frontmatter {
        &self.fields
    }

    /// Look up a front-matter value by field name.
    pub fn field(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }
}
