//! Front-matter splitting and parsing.
//!
//! A source file may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust]
//! ---
//! Body text starts here.
//! ```
//!
//! [`split_frontmatter`] separates the block from the body without
//! interpreting either; [`parse_frontmatter`] turns the block into a
//! [`Frontmatter`] map.

use folio_core::{Error, Result};
use serde_yaml::Value as Yaml;

use crate::document::Frontmatter;
use crate::value::RawValue;

const DELIMITER: &str = "---";

/// Split a source text into `(frontmatter, body)`.
///
/// Returns `Ok((None, text))` when the text does not open with a `---`
/// line. An opening delimiter without a closing one is an error. A
/// leading byte-order mark is ignored; `\r\n` line endings are accepted.
///
/// `path` is only used for error reporting.
///
/// ```
/// use folio_content::split_frontmatter;
///
/// let (fm, body) = split_frontmatter("a.mdx", "---\ntitle: Hi\n---\nBody").unwrap();
/// assert_eq!(fm, Some("title: Hi\n"));
/// assert_eq!(body, "Body");
/// ```
pub fn split_frontmatter<'a>(path: &str, text: &'a str) -> Result<(Option<&'a str>, &'a str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((None, text));
    };
    if !is_delimiter(first) {
        return Ok((None, text));
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            let frontmatter = &text[start..offset];
            let body = &text[offset + line.len()..];
            return Ok((Some(frontmatter), body));
        }
        offset += line.len();
    }

    Err(Error::parse(path, "front-matter opened with `---` is never closed"))
}

/// Parse a front-matter block into a field map.
///
/// An empty (or whitespace-only) block yields an empty map. Anything other
/// than a YAML mapping at the top level is an error.
pub fn parse_frontmatter(path: &str, frontmatter: &str) -> Result<Frontmatter> {
    if frontmatter.trim().is_empty() {
        return Ok(Frontmatter::new());
    }

    let yaml: Yaml = serde_yaml::from_str(frontmatter)
        .map_err(|e| Error::parse(path, format!("invalid YAML front-matter: {e}")))?;

    match RawValue::from(yaml) {
        RawValue::Map(map) => Ok(map),
        RawValue::Null => Ok(Frontmatter::new()),
        other => Err(Error::parse(
            path,
            format!(
                "front-matter must be a mapping of field names, found {}",
                other.type_name()
            ),
        )),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']).trim_end() == DELIMITER
}
