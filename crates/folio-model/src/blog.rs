//! The blog's built-in document types.
//!
//! Used whenever configuration does not define its own document types.

use folio_core::Result;

use crate::schema::{ContentKind, Derivation, DocumentTypeSchema, FieldDescriptor, FieldType};
use crate::schema_set::SchemaSet;

/// Directory the blog keeps its sources in.
pub const CONTENT_DIR: &str = "data";

/// Long-form articles under `articles/`.
pub fn article_type() -> DocumentTypeSchema {
    with_standard_computed(
        DocumentTypeSchema::new("ArticleType", "articles/*.mdx")
            .with_content_kind(ContentKind::Mdx)
            .with_field(
                FieldDescriptor::required("title", FieldType::String)
                    .with_description("The title of the article"),
            )
            .with_field(
                FieldDescriptor::required("desc", FieldType::String)
                    .with_description("One sentence that summarises the article objective."),
            )
            .with_field(
                FieldDescriptor::required("author", FieldType::String)
                    .with_description("The author of the article"),
            )
            .with_field(
                FieldDescriptor::required("date", FieldType::Date)
                    .with_description("The date of the article"),
            )
            .with_field(
                FieldDescriptor::optional("coverPhoto", FieldType::String).with_description(
                    "A cover photo that appears at the top of the article and in meta images",
                ),
            )
            .with_field(
                FieldDescriptor::optional("tags", FieldType::List)
                    .with_description("List of tags applied to the article"),
            ),
    )
}

/// Revision puzzles under `2521-revision-practical/`.
pub fn puzzle() -> DocumentTypeSchema {
    with_standard_computed(
        DocumentTypeSchema::new("Puzzle", "2521-revision-practical/*.mdx")
            .with_content_kind(ContentKind::Mdx)
            .with_field(
                FieldDescriptor::required("title", FieldType::String)
                    .with_description("The title of the puzzle"),
            )
            .with_field(
                FieldDescriptor::required("desc", FieldType::String)
                    .with_description("One sentence that summarises the puzzle objective."),
            )
            .with_field(
                FieldDescriptor::required("class", FieldType::String)
                    .with_description("The class the puzzle relates to"),
            )
            .with_field(
                FieldDescriptor::required("difficulty", FieldType::Number)
                    .with_description("The difficulty of the puzzle"),
            ),
    )
}

/// Reusable page fragments under `block-content/`. Only a slug is derived.
pub fn block_content() -> DocumentTypeSchema {
    DocumentTypeSchema::new("BlockContent", "block-content/*.mdx")
        .with_content_kind(ContentKind::Mdx)
        .with_computed(Derivation::Slug)
}

/// All built-in document types, in definition order.
pub fn schemas() -> Vec<DocumentTypeSchema> {
    vec![article_type(), puzzle(), block_content()]
}

/// The built-in document types as a validated set rooted at
/// [`CONTENT_DIR`].
pub fn schema_set() -> Result<SchemaSet> {
    SchemaSet::new(CONTENT_DIR, schemas())
}

fn with_standard_computed(schema: DocumentTypeSchema) -> DocumentTypeSchema {
    schema
        .with_computed(Derivation::ReadingTime)
        .with_computed(Derivation::WordCount)
        .with_computed(Derivation::Slug)
}
