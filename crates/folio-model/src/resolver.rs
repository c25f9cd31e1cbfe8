//! The document model resolver.
//!
//! [`Resolver::resolve`] maps each raw document to its schema and produces
//! either a [`ResolvedDocument`] or a [`ResolutionError`]. The work for
//! one document reads nothing but that document and the (immutable)
//! schema set, so results do not depend on input order and documents can
//! be resolved in any order or in parallel.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use folio_content::RawDocument;
use serde::Serialize;

use crate::coerce::coerce;
use crate::derive::DEFAULT_WORDS_PER_MINUTE;
use crate::document::ResolvedDocument;
use crate::error::ResolutionError;
use crate::schema::DocumentTypeSchema;
use crate::schema_set::SchemaSet;

/// Outcome for one document that matched a schema.
pub type Resolution = Result<ResolvedDocument, ResolutionError>;

/// Resolves raw documents against a fixed schema set.
#[derive(Clone, Debug)]
pub struct Resolver {
    schemas: SchemaSet,
    words_per_minute: NonZeroU32,
}

impl Resolver {
    pub fn new(schemas: SchemaSet) -> Self {
        Self {
            schemas,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Override the reading speed used for `readingTime`.
    pub fn with_words_per_minute(mut self, words_per_minute: NonZeroU32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn schemas(&self) -> &SchemaSet {
        &self.schemas
    }

    pub fn words_per_minute(&self) -> NonZeroU32 {
        self.words_per_minute
    }

    /// Resolve a whole pass.
    ///
    /// Documents that match no schema are skipped. Every other document
    /// contributes exactly one entry, in input order.
    pub fn resolve(&self, documents: &[RawDocument]) -> ResolveOutput {
        let mut outcomes = Vec::with_capacity(documents.len());
        let mut skipped = 0;

        for doc in documents {
            match self.resolve_one(doc) {
                Some(outcome) => outcomes.push(outcome),
                None => {
                    log::debug!("{}: no document type matches, skipping", doc.path());
                    skipped += 1;
                }
            }
        }

        let output = ResolveOutput { outcomes, skipped };
        log::info!(
            "Resolved {} document(s), {} failed, {} skipped",
            output.documents().len(),
            output.errors().len(),
            output.skipped
        );
        output
    }

    /// Resolve a single document.
    ///
    /// Returns `None` when no schema's pattern matches the path.
    pub fn resolve_one(&self, doc: &RawDocument) -> Option<Resolution> {
        let matched = self.schemas.matching(doc.path());
        match matched.as_slice() {
            [] => None,
            [schema] => Some(self.resolve_with(doc, schema)),
            many => Some(Err(ResolutionError::AmbiguousSchema {
                path: doc.path().to_string(),
                schemas: many.iter().map(|s| s.name.clone()).collect(),
            })),
        }
    }

    /// Resolve `doc` against a schema already chosen for it.
    ///
    /// Either every declared field validates and the full record is
    /// returned, or the first failing field (in declaration order) is
    /// reported and nothing is returned.
    pub fn resolve_with(&self, doc: &RawDocument, schema: &DocumentTypeSchema) -> Resolution {
        let path = doc.path();
        let mut fields = BTreeMap::new();

        for descriptor in &schema.fields {
            match doc.field(&descriptor.name).filter(|raw| !raw.is_null()) {
                Some(raw) => {
                    let value = coerce(descriptor, raw, path)?;
                    fields.insert(descriptor.name.clone(), value);
                }
                None if descriptor.required => {
                    return Err(ResolutionError::MissingRequiredField {
                        field: descriptor.name.clone(),
                        path: path.to_string(),
                    });
                }
                None => {}
            }
        }

        for name in doc.fields().keys() {
            if schema.field(name).is_none() {
                log::debug!(
                    "{path}: field `{name}` is not declared by {}, dropping",
                    schema.name
                );
            }
        }

        for computed in &schema.computed_fields {
            let value = computed
                .derivation
                .derive(doc, schema.content_kind, self.words_per_minute);
            fields.insert(computed.name.clone(), value);
        }

        Ok(ResolvedDocument::new(path, &schema.name, doc.body(), fields))
    }
}

/// Resolve `documents` against `schemas` with the default reading speed.
pub fn resolve(documents: &[RawDocument], schemas: &SchemaSet) -> ResolveOutput {
    Resolver::new(schemas.clone()).resolve(documents)
}

/// Everything a resolution pass produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolveOutput {
    outcomes: Vec<Resolution>,
    skipped: usize,
}

impl ResolveOutput {
    /// Per-document outcomes in input order.
    pub fn outcomes(&self) -> &[Resolution] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Resolution> {
        self.outcomes
    }

    /// Successfully resolved documents in input order.
    pub fn documents(&self) -> Vec<&ResolvedDocument> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok()).collect()
    }

    /// Failures in input order.
    pub fn errors(&self) -> Vec<&ResolutionError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err()).collect()
    }

    /// Number of documents that matched no schema.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }

    /// Resolved documents grouped by schema name, input order kept within
    /// each group.
    pub fn by_type(&self) -> BTreeMap<&str, Vec<&ResolvedDocument>> {
        let mut grouped: BTreeMap<&str, Vec<&ResolvedDocument>> = BTreeMap::new();
        for doc in self.documents() {
            grouped.entry(doc.type_name()).or_default().push(doc);
        }
        grouped
    }
}
