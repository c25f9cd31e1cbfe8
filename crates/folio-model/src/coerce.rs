//! Coercion of raw front-matter values into declared field types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use folio_content::RawValue;

use crate::error::ResolutionError;
use crate::schema::{FieldDescriptor, FieldType};
use crate::value::FieldValue;

/// Coerce `raw` into the type `field` declares.
///
/// - `string`: only string values pass, unchanged.
/// - `number`: finite numeric values, or strings that parse as a finite
///   number. YAML `.nan` and `.inf` are rejected.
/// - `date`: ISO-8601 strings (see [`parse_date`]).
/// - `list`: lists whose every element is a string; order is kept.
pub fn coerce(
    field: &FieldDescriptor,
    raw: &RawValue,
    path: &str,
) -> Result<FieldValue, ResolutionError> {
    let coerced = match (field.field_type, raw) {
        (FieldType::String, RawValue::String(s)) => Some(FieldValue::String(s.clone())),
        (FieldType::Number, RawValue::Number(n)) => {
            Some(*n).filter(|n| n.is_finite()).map(FieldValue::Number)
        }
        (FieldType::Number, RawValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number),
        (FieldType::Date, RawValue::String(s)) => parse_date(s).map(FieldValue::Date),
        (FieldType::List, RawValue::List(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(FieldValue::StringList),
        _ => None,
    };

    coerced.ok_or_else(|| ResolutionError::TypeMismatch {
        field: field.name.clone(),
        expected: field.field_type,
        actual: describe(raw),
        path: path.to_string(),
    })
}

/// Parse an ISO-8601 date or date-time into UTC.
///
/// Accepted forms:
/// - `2022-05-01` (midnight UTC)
/// - `2022-05-01T09:30:00Z`, `2022-05-01T09:30:00+02:00` (RFC 3339)
/// - `2022-05-01T09:30:00` and `2022-05-01 09:30:00` (taken as UTC)
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn describe(raw: &RawValue) -> String {
    match raw {
        RawValue::List(items) => match items.iter().find(|item| item.as_str().is_none()) {
            Some(bad) => format!("list containing {}", bad.type_name()),
            None => "list".to_string(),
        },
        RawValue::Map(_) | RawValue::Null => raw.type_name().to_string(),
        other => format!("{} {}", other.type_name(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn field(field_type: FieldType) -> FieldDescriptor {
        FieldDescriptor::required("f", field_type)
    }

    fn mismatch_actual(result: Result<FieldValue, ResolutionError>) -> String {
        match result {
            Err(ResolutionError::TypeMismatch { actual, .. }) => actual,
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    // ------------------------------------------------------------------------
    // string
    // ------------------------------------------------------------------------

    #[test]
    fn test_string_passthrough() {
        let value = coerce(&field(FieldType::String), &"  Keep Me ".into(), "a.mdx").unwrap();
        assert_eq!(value, FieldValue::String("  Keep Me ".into()));
    }

    #[test]
    fn test_string_rejects_number() {
        let result = coerce(&field(FieldType::String), &RawValue::Number(2021.0), "a.mdx");
        assert_eq!(mismatch_actual(result), "number 2021");
    }

    // ------------------------------------------------------------------------
    // number
    // ------------------------------------------------------------------------

    #[test]
    fn test_number_from_number() {
        let value = coerce(&field(FieldType::Number), &RawValue::Number(3.0), "p.mdx").unwrap();
        assert_eq!(value, FieldValue::Number(3.0));
    }

    #[test]
    fn test_number_from_numeric_string() {
        let value = coerce(&field(FieldType::Number), &" 4.5 ".into(), "p.mdx").unwrap();
        assert_eq!(value, FieldValue::Number(4.5));
    }

    #[test]
    fn test_number_rejects_text() {
        let result = coerce(&field(FieldType::Number), &"hard".into(), "p.mdx");
        assert_eq!(mismatch_actual(result), "string \"hard\"");
    }

    #[test]
    fn test_number_rejects_non_finite_string() {
        let result = coerce(&field(FieldType::Number), &"NaN".into(), "p.mdx");
        assert!(result.is_err());
    }

    #[test]
    fn test_number_rejects_non_finite_number() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = coerce(&field(FieldType::Number), &RawValue::Number(n), "p.mdx");
            assert!(matches!(result, Err(ResolutionError::TypeMismatch { .. })));
        }
    }

    #[test]
    fn test_number_rejects_bool() {
        let result = coerce(&field(FieldType::Number), &RawValue::Bool(true), "p.mdx");
        assert_eq!(mismatch_actual(result), "boolean true");
    }

    // ------------------------------------------------------------------------
    // date
    // ------------------------------------------------------------------------

    #[test]
    fn test_date_plain() {
        let value = coerce(&field(FieldType::Date), &"2022-05-01".into(), "a.mdx").unwrap();
        assert_eq!(
            value,
            FieldValue::Date(Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_date_rfc3339_offset() {
        let date = parse_date("2022-05-01T09:30:00+02:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2022, 5, 1, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_date_naive_datetime() {
        let expected = Utc.with_ymd_and_hms(2022, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_date("2022-05-01T09:30:00"), Some(expected));
        assert_eq!(parse_date("2022-05-01 09:30:00"), Some(expected));
    }

    #[test]
    fn test_date_rejects_garbage() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2022-13-01").is_none());
        assert!(parse_date("01/05/2022").is_none());

        let result = coerce(&field(FieldType::Date), &"yesterday".into(), "a.mdx");
        assert!(matches!(
            result,
            Err(ResolutionError::TypeMismatch {
                expected: FieldType::Date,
                ..
            })
        ));
    }

    // ------------------------------------------------------------------------
    // list
    // ------------------------------------------------------------------------

    #[test]
    fn test_list_preserves_order() {
        let raw = RawValue::from(vec!["zeta", "alpha", "mid"]);
        let value = coerce(&field(FieldType::List), &raw, "a.mdx").unwrap();
        assert_eq!(
            value.as_list().unwrap(),
            &["zeta".to_string(), "alpha".to_string(), "mid".to_string()]
        );
    }

    #[test]
    fn test_list_empty() {
        let raw = RawValue::List(vec![]);
        let value = coerce(&field(FieldType::List), &raw, "a.mdx").unwrap();
        assert_eq!(value, FieldValue::StringList(vec![]));
    }

    #[test]
    fn test_list_rejects_non_string_element() {
        let raw = RawValue::List(vec!["ok".into(), RawValue::Number(1.0)]);
        let result = coerce(&field(FieldType::List), &raw, "a.mdx");
        assert_eq!(mismatch_actual(result), "list containing number");
    }

    #[test]
    fn test_list_rejects_scalar() {
        let result = coerce(&field(FieldType::List), &"rust".into(), "a.mdx");
        assert_eq!(mismatch_actual(result), "string \"rust\"");
    }

    #[test]
    fn test_mismatch_carries_context() {
        let descriptor = FieldDescriptor::required("difficulty", FieldType::Number);
        let err = coerce(&descriptor, &"hard".into(), "data/p/x.mdx").unwrap_err();
        assert_eq!(err.field(), Some("difficulty"));
        assert_eq!(err.path(), "data/p/x.mdx");
    }
}
