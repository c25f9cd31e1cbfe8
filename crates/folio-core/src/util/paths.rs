//! Path helpers.
//!
//! Document paths travel through Folio as `/`-separated strings so that
//! glob matching and slug derivation behave identically on every
//! platform. These helpers convert filesystem paths into that form.

use std::path::{Component, Path, PathBuf};

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use folio_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/blog");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Render a path as a `/`-separated string.
///
/// Only normal components and a leading root are kept; `.` segments are
/// dropped.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Normal(part) => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&part.to_string_lossy());
            }
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str("..");
            }
        }
    }
    out
}

/// Strip a leading directory from a `/`-separated path.
///
/// Returns the path unchanged when it does not live under `dir`. An empty
/// `dir` never strips anything.
///
/// ```
/// use folio_core::util::paths::strip_dir_prefix;
///
/// assert_eq!(strip_dir_prefix("data/articles/a.mdx", "data"), "articles/a.mdx");
/// assert_eq!(strip_dir_prefix("articles/a.mdx", "data"), "articles/a.mdx");
/// ```
pub fn strip_dir_prefix<'a>(path: &'a str, dir: &str) -> &'a str {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        return path;
    }
    match path.strip_prefix(dir) {
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => path,
    }
}

/// The final segment of a `/`-separated path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
