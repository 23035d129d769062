//! Normalization applied before anything is persisted: blank input becomes an
//! explicit null so the store never holds ambiguous empty strings.

use serde_json::{Map, Value};

/// Columns a partial update may touch. `id` is immutable.
pub const UPDATABLE_FIELDS: [&str; 7] = [
    "account_id",
    "entry_date",
    "cert_type",
    "cert_name",
    "cert_date",
    "file_id",
    "notes",
];

pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Maps every `""` value in a JSON payload to `null`. All other values, including
/// whitespace-only strings, numbers and booleans, pass through unchanged.
pub fn sanitize_payload(payload: Map<String, Value>) -> Map<String, Value> {
    payload
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) if s.is_empty() => (key, Value::Null),
            other => (key, other),
        })
        .collect()
}

/// Returns the first key that is not an updatable column, if any.
pub fn unknown_field(payload: &Map<String, Value>) -> Option<&str> {
    payload
        .keys()
        .map(String::as_str)
        .find(|key| !UPDATABLE_FIELDS.contains(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn empty_strings_become_null() {
        let out = sanitize_payload(object(json!({
            "cert_name": "",
            "notes": "",
            "file_id": null,
        })));
        assert_eq!(out["cert_name"], Value::Null);
        assert_eq!(out["notes"], Value::Null);
        assert_eq!(out["file_id"], Value::Null);
    }

    #[test]
    fn other_values_are_not_altered() {
        let input = object(json!({
            "cert_type": "Safety",
            "notes": " ",
            "cert_date": "2024-01-31",
        }));
        assert_eq!(sanitize_payload(input.clone()), input);
    }

    #[test]
    fn keys_are_preserved() {
        let out = sanitize_payload(object(json!({ "cert_type": "", "cert_name": "CPR" })));
        assert_eq!(out.len(), 2);
        assert_eq!(out["cert_name"], json!("CPR"));
    }

    #[test]
    fn unknown_field_reports_foreign_keys() {
        assert_eq!(unknown_field(&object(json!({ "notes": "x" }))), None);
        assert_eq!(unknown_field(&object(json!({ "id": "x" }))), Some("id"));
    }

    #[test]
    fn blank_to_none_only_drops_empty() {
        assert_eq!(blank_to_none(Some(String::new())), None);
        assert_eq!(blank_to_none(Some("a".into())), Some("a".into()));
        assert_eq!(blank_to_none(None), None);
    }
}
