//! Author-supplied front-matter values.
//!
//! YAML is converted into [`RawValue`] at the boundary so nothing
//! downstream handles untyped YAML. Values are unvalidated: coercion into
//! declared field types happens in the resolver.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_yaml::Value as Yaml;

/// A raw front-matter value as written by the author.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<RawValue>),
    Map(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Short name of the variant, used in type mismatch reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Yaml> for RawValue {
    fn from(value: Yaml) -> Self {
        match value {
            Yaml::Null => Self::Null,
            Yaml::Bool(b) => Self::Bool(b),
            Yaml::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Yaml::String(s) => Self::String(s),
            Yaml::Sequence(seq) => Self::List(seq.into_iter().map(Self::from).collect()),
            Yaml::Mapping(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Self::from(v)))
                    .collect(),
            ),
            // Custom tags (`!foo bar`) keep their inner value.
            Yaml::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => write!(f, "{{{} keys}}", map.len()),
        }
    }
}

/// Mapping keys are rendered to strings; YAML allows non-string keys.
fn yaml_key(key: Yaml) -> String {
    match key {
        Yaml::String(s) => s,
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Yaml {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_from_yaml_scalars() {
        assert_eq!(RawValue::from(yaml("~")), RawValue::Null);
        assert_eq!(RawValue::from(yaml("true")), RawValue::Bool(true));
        assert_eq!(RawValue::from(yaml("3")), RawValue::Number(3.0));
        assert_eq!(RawValue::from(yaml("2.5")), RawValue::Number(2.5));
        assert_eq!(RawValue::from(yaml("hello")), RawValue::from("hello"));
    }

    #[test]
    fn test_from_yaml_date_stays_string() {
        assert_eq!(
            RawValue::from(yaml("2022-05-01")),
            RawValue::from("2022-05-01")
        );
    }

    #[test]
    fn test_from_yaml_sequence_keeps_order() {
        let value = RawValue::from(yaml("[rust, web, notes]"));
        assert_eq!(value, RawValue::from(vec!["rust", "web", "notes"]));
    }

    #[test]
    fn test_from_yaml_mapping() {
        let value = RawValue::from(yaml("a: 1\n2: two"));
        match value {
            RawValue::Map(map) => {
                assert_eq!(map.get("a"), Some(&RawValue::Number(1.0)));
                assert_eq!(map.get("2"), Some(&RawValue::from("two")));
            }
            other => panic!("Expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_type_name() {
        assert_eq!(RawValue::Null.type_name(), "null");
        assert_eq!(RawValue::from(1.0).type_name(), "number");
        assert_eq!(RawValue::from("x").type_name(), "string");
        assert_eq!(RawValue::from(vec!["x"]).type_name(), "list");
        assert_eq!(RawValue::Map(BTreeMap::new()).type_name(), "map");
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::from("hi").to_string(), "\"hi\"");
        assert_eq!(RawValue::from(vec!["a", "b"]).to_string(), "[\"a\", \"b\"]");
        assert_eq!(RawValue::Null.to_string(), "null");
    }
}
