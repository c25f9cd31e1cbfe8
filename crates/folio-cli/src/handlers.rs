//! Handlers for `folio resolve`, `folio check` and `folio schemas`.

use std::path::Path;

use folio_content::{ContentSource, LoadOutput};
use folio_core::traits::ConfigProvider;
use folio_core::{Error, Result};
use folio_model::{ResolveOutput, Resolver, SchemaSet};

use crate::config::FolioConfig;

/// File name of each per-type index under the output directory.
pub const INDEX_FILE: &str = "_index.json";

// ============================================================================
// Resolution pass
// ============================================================================

/// Result of loading and resolving a content directory.
#[derive(Debug)]
pub struct Pass {
    pub schemas: SchemaSet,
    pub loaded: LoadOutput,
    pub output: ResolveOutput,
}

impl Pass {
    /// Files that failed to load plus documents that failed to resolve.
    pub fn failure_count(&self) -> usize {
        self.loaded.failures.len() + self.output.errors().len()
    }

    fn report_failures(&self) {
        for failure in &self.loaded.failures {
            tracing::error!("{}: {}", failure.path, failure.error);
        }
        for error in self.output.errors() {
            tracing::error!("{error}");
        }
    }

    fn into_result(self) -> Result<Self> {
        match self.failure_count() {
            0 => Ok(self),
            n => Err(Error::content(format!("{n} document(s) failed to resolve"))),
        }
    }
}

/// Load the configured content directory and resolve it.
///
/// Stops before resolving if any path matches more than one document type.
pub async fn run_pass(config: &FolioConfig) -> Result<Pass> {
    let schemas = config.schema_set()?;
    let resolver = Resolver::new(schemas.clone()).with_words_per_minute(config.words_per_minute()?);

    let source = ContentSource::new(config.content_dir()?)
        .with_extensions(config.content.extensions.iter().cloned());
    let loaded = source.load().await?;

    let ambiguous = schemas.check_paths(loaded.documents.iter().map(|d| d.path()));
    if !ambiguous.is_empty() {
        for error in &ambiguous {
            tracing::error!("{error}");
        }
        return Err(Error::schema(format!(
            "{} path(s) match more than one document type",
            ambiguous.len()
        )));
    }

    let output = resolver.resolve(&loaded.documents);

    Ok(Pass {
        schemas,
        loaded,
        output,
    })
}

// ============================================================================
// Command handlers
// ============================================================================

/// `folio resolve`: write per-type indexes, or print every document as JSON.
pub async fn handle_resolve(config: &FolioConfig, output: Option<&str>, pretty: bool) -> Result<()> {
    let pass = run_pass(config).await?;

    match output {
        Some(dir) => {
            let written = write_indexes(&pass, Path::new(dir), pretty)?;
            println!("Wrote {written} index file(s) to {dir}");
        }
        None => println!("{}", to_json(&pass.output.documents(), pretty)?),
    }

    pass.report_failures();
    pass.into_result().map(|_| ())
}

/// `folio check`: resolve without writing and list every problem.
pub async fn handle_check(config: &FolioConfig) -> Result<()> {
    let pass = run_pass(config).await?;

    println!("Checked {}:", config.content_dir()?.display());
    println!("  Resolved: {}", pass.output.documents().len());
    println!("  Failed:   {}", pass.failure_count());
    println!("  Skipped:  {}", pass.output.skipped());

    pass.report_failures();
    pass.into_result().map(|_| ())
}

/// `folio schemas`: describe each configured document type.
pub fn handle_schemas(config: &FolioConfig) -> Result<()> {
    print!("{}", describe_schemas(&config.schema_set()?));
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

/// Write `<dir>/<Type>/_index.json` for every document type, including
/// types with no documents. Returns the number of files written.
pub fn write_indexes(pass: &Pass, dir: &Path, pretty: bool) -> Result<usize> {
    let grouped = pass.output.by_type();
    let mut written = 0;

    for schema in pass.schemas.iter() {
        let type_dir = dir.join(&schema.name);
        std::fs::create_dir_all(&type_dir).map_err(|e| Error::io_with_path(e, &type_dir))?;

        let docs = grouped.get(schema.name.as_str()).cloned().unwrap_or_default();
        let path = type_dir.join(INDEX_FILE);
        std::fs::write(&path, to_json(&docs, pretty)?)
            .map_err(|e| Error::io_with_path(e, &path))?;
        tracing::debug!("Wrote {} ({} document(s))", path.display(), docs.len());
        written += 1;
    }

    Ok(written)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| Error::serialization(e.to_string()))
}

fn describe_schemas(schemas: &SchemaSet) -> String {
    let mut out = String::new();
    for schema in schemas.iter() {
        out.push_str(&format!(
            "{} ({}, {})\n",
            schema.name, schema.file_path_pattern, schema.content_kind
        ));
        for field in &schema.fields {
            let marker = if field.required { "required" } else { "optional" };
            out.push_str(&format!(
                "  {}: {} [{marker}]\n",
                field.name, field.field_type
            ));
        }
        for computed in &schema.computed_fields {
            out.push_str(&format!(
                "  {}: {} [computed]\n",
                computed.name,
                computed.derivation.output_type()
            ));
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn blog(temp: &TempDir) -> FolioConfig {
        let data = temp.path().join("data");
        write(
            &data,
            "articles/my-post.mdx",
            "---\ntitle: My Post\ndesc: Hello\nauthor: Sam\ndate: 2022-05-01\n---\nOne two three four five",
        );
        write(&data, "block-content/intro.mdx", "Welcome aboard.");
        write(&data, "drafts/later.mdx", "not routed");

        FolioConfig {
            base_path: Some(temp.path().to_string_lossy().into_owned()),
            ..FolioConfig::default()
        }
    }

    #[tokio::test]
    async fn test_run_pass() {
        let temp = TempDir::new().unwrap();
        let config = blog(&temp);

        let pass = run_pass(&config).await.unwrap();
        assert_eq!(pass.failure_count(), 0);
        assert_eq!(pass.output.documents().len(), 2);
        assert_eq!(pass.output.skipped(), 1);
    }

    #[tokio::test]
    async fn test_write_indexes() {
        let temp = TempDir::new().unwrap();
        let config = blog(&temp);
        let out = temp.path().join("generated");

        let pass = run_pass(&config).await.unwrap();
        let written = write_indexes(&pass, &out, false).unwrap();
        assert_eq!(written, 3);

        let text = fs::read_to_string(out.join("ArticleType").join(INDEX_FILE)).unwrap();
        let articles: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(articles[0]["slug"], "my-post");
        assert_eq!(articles[0]["readingTime"]["text"], "1 min read");
        assert_eq!(articles[0]["type"], "ArticleType");

        let text = fs::read_to_string(out.join("Puzzle").join(INDEX_FILE)).unwrap();
        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_handle_resolve_reports_failures() {
        let temp = TempDir::new().unwrap();
        let config = blog(&temp);
        write(
            &temp.path().join("data"),
            "articles/no-author.mdx",
            "---\ntitle: T\ndesc: D\ndate: 2022-05-01\n---\nbody",
        );
        let out = temp.path().join("generated");

        let err = handle_resolve(&config, Some(out.to_str().unwrap()), true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("1 document(s) failed"));
        // The valid documents are still written.
        assert!(out.join("ArticleType").join(INDEX_FILE).exists());
    }

    #[tokio::test]
    async fn test_handle_check_malformed_front_matter() {
        let temp = TempDir::new().unwrap();
        let config = blog(&temp);
        write(
            &temp.path().join("data"),
            "articles/broken.mdx",
            "---\ntitle: never closed\n",
        );

        let err = handle_check(&config).await.unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[tokio::test]
    async fn test_run_pass_rejects_ambiguous_paths() {
        let temp = TempDir::new().unwrap();
        let mut config = blog(&temp);
        config.document_types = vec![
            folio_model::DocumentTypeSchema::new("Any", "articles/*.mdx"),
            folio_model::DocumentTypeSchema::new("Mine", "articles/my-*.mdx"),
        ];

        let err = run_pass(&config).await.unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[tokio::test]
    async fn test_run_pass_missing_content_dir() {
        let temp = TempDir::new().unwrap();
        let config = FolioConfig {
            base_path: Some(temp.path().to_string_lossy().into_owned()),
            ..FolioConfig::default()
        };
        let err = run_pass(&config).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_describe_schemas() {
        let text = describe_schemas(&folio_model::blog::schema_set().unwrap());
        assert!(text.contains("ArticleType (articles/*.mdx, mdx)"));
        assert!(text.contains("  author: string [required]"));
        assert!(text.contains("  tags: list of string [optional]"));
        assert!(text.contains("  difficulty: number [required]"));
        assert!(text.contains("  slug: string [computed]"));
    }
}
