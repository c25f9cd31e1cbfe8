//! Loading a content directory into raw documents.
//!
//! [`ContentSource`] walks the content directory, reads every source file
//! with a matching extension and splits it into a [`RawDocument`]. A file
//! that cannot be read or whose front-matter is malformed is reported as
//! a [`LoadFailure`]; the rest of the directory still loads.

use std::path::{Path, PathBuf};

use folio_core::util::files::{self, FindOptions};
use folio_core::util::paths::to_slash;
use folio_core::{Error, Result};
use futures::future::join_all;

use crate::document::RawDocument;

/// A source file that could not be turned into a [`RawDocument`].
#[derive(Debug)]
pub struct LoadFailure {
    /// `/`-separated path of the file.
    pub path: String,
    pub error: Error,
}

/// Everything one load produced.
#[derive(Debug, Default)]
pub struct LoadOutput {
    /// Documents in path order.
    pub documents: Vec<RawDocument>,
    pub failures: Vec<LoadFailure>,
}

/// A directory of source documents.
#[derive(Clone, Debug)]
pub struct ContentSource {
    content_dir: PathBuf,
    options: FindOptions,
}

impl ContentSource {
    /// A source over `content_dir` reading `.mdx` files.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            options: FindOptions::mdx(),
        }
    }

    /// Replace the set of source file extensions (without dots).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = FindOptions::with_extensions(extensions);
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// The content directory in the `/`-separated form document paths use.
    pub fn content_dir_str(&self) -> String {
        to_slash(&self.content_dir)
    }

    /// Discover and read every source file.
    ///
    /// # Errors
    ///
    /// Fails only if the content directory itself is missing or cannot be
    /// walked. Per-file problems land in [`LoadOutput::failures`].
    pub async fn load(&self) -> Result<LoadOutput> {
        if !files::exists(&self.content_dir).await {
            return Err(Error::not_found(format!(
                "content directory {}",
                self.content_dir.display()
            )));
        }

        let found = files::find_all_files(&self.content_dir, &self.options).await?;
        let reads = found.iter().map(|info| async move {
            let path = to_slash(&self.content_dir.join(&info.relative_path));
            // Document paths must name the file exactly.
            let loaded = if info.path.to_str().is_none() {
                Err(Error::content(format!("{path}: path is not valid UTF-8")))
            } else {
                match files::read_file(&info.path).await {
                    Ok(text) => RawDocument::from_source(path.clone(), &text),
                    Err(e) => Err(e),
                }
            };
            (path, loaded)
        });

        let mut output = LoadOutput::default();
        for (path, loaded) in join_all(reads).await {
            match loaded {
                Ok(doc) => output.documents.push(doc),
                Err(error) => {
                    log::warn!("Skipping {path}: {error}");
                    output.failures.push(LoadFailure { path, error });
                }
            }
        }

        log::info!(
            "Loaded {} document(s) from {} ({} failed)",
            output.documents.len(),
            self.content_dir.display(),
            output.failures.len()
        );
        Ok(output)
    }
}
