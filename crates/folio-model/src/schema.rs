//! Document type schemas.
//!
//! A [`DocumentTypeSchema`] names a class of documents, says which source
//! files belong to it (a glob relative to the content directory), which
//! front-matter fields they declare, and which computed fields are derived
//! for them.
//!
//! Schemas deserialize from configuration:
//!
//! ```toml
//! [[document_types]]
//! name = "Puzzle"
//! filePathPattern = "2521-revision-practical/*.mdx"
//! contentKind = "mdx"
//! computedFields = ["readingTime", "wordCount", "slug"]
//!
//! [[document_types.fields]]
//! name = "difficulty"
//! type = "number"
//! required = true
//! description = "The difficulty of the puzzle"
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a front-matter field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Date,
    /// A list whose elements are all strings.
    #[serde(alias = "list-of-string")]
    List,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::List => "list of string",
        };
        f.write_str(name)
    }
}

/// One declared front-matter field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl FieldDescriptor {
    /// A field that must be present and non-null.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            description: String::new(),
        }
    }

    /// A field that may be omitted.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, field_type)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Source format of a document type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Mdx,
    Markdown,
}

impl ContentKind {
    /// File-name suffix stripped when deriving a slug.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Mdx => ".mdx",
            Self::Markdown => ".md",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mdx => f.write_str("mdx"),
            Self::Markdown => f.write_str("markdown"),
        }
    }
}

/// The fixed set of computed-field derivations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Derivation {
    /// File name without the source suffix.
    Slug,
    /// Whitespace-delimited token count of the body.
    WordCount,
    /// Estimated reading time from the word count.
    ReadingTime,
}

impl Derivation {
    pub const ALL: [Derivation; 3] = [Self::Slug, Self::WordCount, Self::ReadingTime];

    /// Canonical field name, also the name used to select it in config.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::WordCount => "wordCount",
            Self::ReadingTime => "readingTime",
        }
    }

    /// Look a derivation up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Type of the value the derivation produces.
    pub fn output_type(&self) -> &'static str {
        match self {
            Self::Slug => "string",
            Self::WordCount => "number",
            Self::ReadingTime => "json",
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A computed field: an output key and the derivation that fills it.
///
/// In configuration either a bare derivation name (`"slug"`, the key is
/// the derivation's own name) or a table `{ name, derivation }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ComputedFieldSpec")]
pub struct ComputedField {
    pub name: String,
    pub derivation: Derivation,
}

impl From<Derivation> for ComputedField {
    fn from(derivation: Derivation) -> Self {
        Self {
            name: derivation.name().to_string(),
            derivation,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComputedFieldSpec {
    Bare(Derivation),
    Named { name: String, derivation: Derivation },
}

impl From<ComputedFieldSpec> for ComputedField {
    fn from(spec: ComputedFieldSpec) -> Self {
        match spec {
            ComputedFieldSpec::Bare(derivation) => derivation.into(),
            ComputedFieldSpec::Named { name, derivation } => Self { name, derivation },
        }
    }
}

/// A named class of documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeSchema {
    pub name: String,
    /// Glob relative to the content directory, e.g. `articles/*.mdx`.
    pub file_path_pattern: String,
    #[serde(default)]
    pub content_kind: ContentKind,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub computed_fields: Vec<ComputedField>,
}

impl DocumentTypeSchema {
    pub fn new(name: impl Into<String>, file_path_pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path_pattern: file_path_pattern.into(),
            content_kind: ContentKind::default(),
            fields: Vec::new(),
            computed_fields: Vec::new(),
        }
    }

    pub fn with_content_kind(mut self, kind: ContentKind) -> Self {
        self.content_kind = kind;
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a computed field under the derivation's canonical name.
    pub fn with_computed(mut self, derivation: Derivation) -> Self {
        self.computed_fields.push(derivation.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required declared fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}
