//! The resolved document record handed to renderers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{FieldValue, ReadingTime};

/// A typed record derived from exactly one raw document and one schema.
///
/// Serializes flat, the way renderers read it:
///
/// ```json
/// { "_id": "data/articles/a.mdx", "type": "ArticleType",
///   "body": { "raw": "..." }, "title": "...", "slug": "a", ... }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type")]
    type_name: String,
    body: Body,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Body {
    raw: String,
}

impl ResolvedDocument {
    pub(crate) fn new(
        id: impl Into<String>,
        type_name: impl Into<String>,
        body_raw: impl Into<String>,
        fields: BTreeMap<String, FieldValue>,
    ) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            body: Body {
                raw: body_raw.into(),
            },
            fields,
        }
    }

    /// Source path of the document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the schema that resolved this document.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn body_raw(&self) -> &str {
        &self.body.raw
    }

    /// Declared and computed fields, by name.
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The `slug` computed field, when the schema computes one.
    pub fn slug(&self) -> Option<&str> {
        self.get("slug").and_then(FieldValue::as_str)
    }

    /// The `wordCount` computed field, when the schema computes one.
    pub fn word_count(&self) -> Option<usize> {
        self.get("wordCount").and_then(FieldValue::as_count)
    }

    /// The `readingTime` computed field, when the schema computes one.
    pub fn reading_time(&self) -> Option<&ReadingTime> {
        self.get("readingTime").and_then(FieldValue::as_reading_time)
    }
}
