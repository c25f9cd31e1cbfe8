//! Core traits for Folio.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where a
//! project's content lives so that loaders and the CLI do not depend on a
//! concrete configuration struct.

use std::path::PathBuf;

use crate::Result;

/// Trait for project configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct BlogConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for BlogConfig {
///     fn project_name(&self) -> &str {
///         "blog"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_dir(&self) -> Result<PathBuf> {
///         Ok(self.root.join("data"))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and display.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Directory holding the source documents.
    ///
    /// Document type file-path patterns are matched relative to this
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path cannot be resolved.
    fn content_dir(&self) -> Result<PathBuf>;
}
