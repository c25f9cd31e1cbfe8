//! Typed field values of a resolved document.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Estimated reading time of a document body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    /// Human-readable form, e.g. `"3 min read"`.
    pub text: String,
    /// Whole minutes, rounded up, at least 1.
    pub minutes: u64,
    /// Estimate in milliseconds, rounded to the nearest millisecond.
    pub time: u64,
    /// Word count the estimate was computed from.
    pub words: usize,
}

/// A validated declared value or a computed value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Number(f64),
    /// Serialized as RFC 3339.
    Date(DateTime<Utc>),
    StringList(Vec<String>),
    Count(usize),
    ReadingTime(ReadingTime),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Count(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_reading_time(&self) -> Option<&ReadingTime> {
        match self {
            Self::ReadingTime(rt) => Some(rt),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::String("a".into()).as_str(), Some("a"));
        assert_eq!(FieldValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(FieldValue::Count(4).as_number(), Some(4.0));
        assert_eq!(FieldValue::Count(4).as_count(), Some(4));
        assert!(FieldValue::Number(1.0).as_str().is_none());
        assert_eq!(
            FieldValue::StringList(vec!["x".into()]).as_list(),
            Some(&["x".to_string()][..])
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let date = Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(
            serde_json::to_string(&FieldValue::Date(date)).unwrap(),
            "\"2022-05-01T00:00:00Z\""
        );
        assert_eq!(serde_json::to_string(&FieldValue::Count(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&FieldValue::StringList(vec!["a".into(), "b".into()]))
                .unwrap(),
            "[\"a\",\"b\"]"
        );
    }

    #[test]
    fn test_serialize_reading_time() {
        let rt = ReadingTime {
            text: "1 min read".into(),
            minutes: 1,
            time: 1500,
            words: 5,
        };
        let json = serde_json::to_value(FieldValue::ReadingTime(rt)).unwrap();
        assert_eq!(json["text"], "1 min read");
        assert_eq!(json["minutes"], 1);
        assert_eq!(json["words"], 5);
    }
}
