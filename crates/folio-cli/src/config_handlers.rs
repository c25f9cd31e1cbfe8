//! Handler functions for `folio config {path,get,set,init,export}`.
//!
//! Each command renders its report as a string; [`handle_config_command`]
//! prints it.

use std::path::{Path, PathBuf};

use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Takes the raw `--config` path rather than a loaded config because `path`
/// and `init` must work before any config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let report = match action {
        ConfigAction::Path => config_path_report(config_path)?,
        ConfigAction::Get { key } => config_get(config_path, &key)?,
        ConfigAction::Set { key, value } => {
            let path = FolioConfig::resolve_config_path(config_path)
                .ok_or_else(|| Error::config("Could not determine config directory"))?;
            config_set(&path, &key, &value)?;
            format!("Set {key} = {value} in {}", path.display())
        }
        ConfigAction::Init { file, force } => {
            let path = match file {
                Some(p) => PathBuf::from(p),
                None => FolioConfig::default_config_path()
                    .ok_or_else(|| Error::config("Could not determine config directory"))?,
            };
            config_init(&path, force)?;
            format!("Config file created at {}", path.display())
        }
        ConfigAction::Export { docker_env } => {
            config_export(&FolioConfig::load(config_path)?, docker_env)?
        }
    };
    println!("{report}");
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

fn config_path_report(config_path: Option<&str>) -> Result<String> {
    let path = FolioConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    if !path.exists() {
        log::warn!(
            "{} does not exist; run `folio config init` to create it",
            path.display()
        );
    }
    Ok(path.display().to_string())
}

fn config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = FolioConfig::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    lookup(&tree, key)
        .map(render)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

fn config_set(path: &Path, key: &str, raw: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `folio config init` first.",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut tree: toml::Value = toml::from_str(&text)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    assign(&mut tree, key, infer_value(raw))?;

    // Reject edits that would leave an unloadable file behind.
    tree.clone()
        .try_into::<FolioConfig>()
        .map_err(|e| Error::config(format!("{key} = {raw} is not a valid setting: {e}")))?;

    let text = toml::to_string_pretty(&tree).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(path, text).map_err(|e| Error::io_with_path(e, path))
}

fn config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    // Write the built-in document types out so they can be edited in place.
    let config = FolioConfig {
        document_types: folio_model::blog::schemas(),
        ..FolioConfig::default()
    };
    std::fs::write(path, config.to_toml_string()?).map_err(|e| Error::io_with_path(e, path))
}

fn config_export(config: &FolioConfig, docker_env: bool) -> Result<String> {
    let prefix = if docker_env { "--env " } else { "" };
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{prefix}{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

fn lookup<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, part| node.as_table()?.get(part))
}

/// Insert `value` at a dotted key, creating intermediate tables.
fn assign(tree: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut node = tree;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        node = node
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("Cannot navigate into non-table at '{part}'")))?
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    node.as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Read a command-line value as bool, integer, float, or string, in that order.
fn infer_value(raw: &str) -> toml::Value {
    match raw {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => raw
            .parse::<i64>()
            .map(toml::Value::Integer)
            .or_else(|_| raw.parse::<f64>().map(toml::Value::Float))
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
    }
}

fn render(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
