//! Configuration for the `folio` CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults

use std::num::NonZeroU32;
use std::path::PathBuf;

use confyg::{Confygery, env};
use folio_core::traits::ConfigProvider;
use folio_core::util::paths::{expand_tilde, to_slash};
use folio_core::{Error, Result};
use folio_model::{DocumentTypeSchema, SchemaSet, blog};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `folio` CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, used for display.
    pub project_name: String,

    /// Base path for all project data; the working directory when unset.
    pub base_path: Option<String>,

    /// Where source documents live.
    pub content: ContentConfig,

    /// Resolution settings.
    pub resolve: ResolveConfig,

    /// Document types. When empty the built-in blog types are used.
    pub document_types: Vec<DocumentTypeSchema>,
}

/// Content directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory, relative to the base path unless absolute.
    pub dir: String,

    /// Source file extensions (without dot).
    pub extensions: Vec<String>,
}

/// Resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Average reading speed for `readingTime`.
    pub words_per_minute: u32,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            resolve: ResolveConfig::default(),
            document_types: Vec::new(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: blog::CONTENT_DIR.to_string(),
            extensions: vec!["mdx".to_string()],
        }
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            words_per_minute: folio_model::derive::DEFAULT_WORDS_PER_MINUTE.get(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("resolve");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        log::debug!(
            "Loaded config for {} ({} document type(s) configured)",
            config.project_name,
            config.document_types.len()
        );
        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// The configured document types, or the built-in ones.
    pub fn document_types(&self) -> Vec<DocumentTypeSchema> {
        if self.document_types.is_empty() {
            blog::schemas()
        } else {
            self.document_types.clone()
        }
    }

    /// Validated schema set rooted at the content directory.
    pub fn schema_set(&self) -> Result<SchemaSet> {
        let content_dir = to_slash(&self.content_dir()?);
        SchemaSet::new(content_dir, self.document_types())
    }

    /// Reading speed, rejecting zero.
    pub fn words_per_minute(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.resolve.words_per_minute)
            .ok_or_else(|| Error::config("resolve.words_per_minute must be greater than zero"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten the scalar settings into `FOLIO_*` environment variable pairs.
    ///
    /// Document types are structured and have no environment form.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let mut value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        if let Some(table) = value.as_table_mut() {
            table.remove("document_types");
        }
        let mut vars = Vec::new();
        flatten_into_env(&value, "FOLIO", &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_dir(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join(expand_tilde(&self.content.dir)))
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

fn flatten_into_env(value: &toml::Value, key: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (name, child) in table {
                flatten_into_env(child, &format!("{key}_{}", name.to_uppercase()), out);
            }
        }
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            out.push((key.to_string(), joined));
        }
        toml::Value::String(s) => out.push((key.to_string(), s.clone())),
        other => out.push((key.to_string(), other.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
