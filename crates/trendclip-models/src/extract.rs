//! Lenient field readers over untyped JSON payloads.
//!
//! Remote agents return loosely-typed objects; these helpers read one field
//! at a time and substitute a default when the field is missing or has the
//! wrong shape, so projection never fails on a malformed payload.

use serde_json::{Map, Value};

pub(crate) fn str_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn u64_field(fields: &Map<String, Value>, key: &str) -> u64 {
    match fields.get(key) {
        Some(v) => v
            .as_u64()
            .or_else(|| v.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or(0),
        None => 0,
    }
}

pub(crate) fn f64_field(fields: &Map<String, Value>, key: &str) -> f64 {
    fields.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub(crate) fn bool_field(fields: &Map<String, Value>, key: &str) -> bool {
    fields.get(key).and_then(Value::as_bool).unwrap_or(false)
}

pub(crate) fn str_list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn opt_str_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> Map<String, Value> {
        match json!({
            "title": "hello",
            "views": 1200,
            "score": 94.5,
            "flag": true,
            "tags": ["#a", "#b", 3],
            "bad_num": "not a number",
        }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_present_fields() {
        let f = fields();
        assert_eq!(str_field(&f, "title"), "hello");
        assert_eq!(u64_field(&f, "views"), 1200);
        assert_eq!(f64_field(&f, "score"), 94.5);
        assert!(bool_field(&f, "flag"));
        assert_eq!(str_list_field(&f, "tags"), vec!["#a", "#b"]);
    }

    #[test]
    fn test_missing_or_mistyped_fields_default() {
        let f = fields();
        assert_eq!(str_field(&f, "absent"), "");
        assert_eq!(u64_field(&f, "bad_num"), 0);
        assert_eq!(f64_field(&f, "title"), 0.0);
        assert!(!bool_field(&f, "absent"));
        assert!(str_list_field(&f, "title").is_empty());
        assert_eq!(opt_str_field(&f, "absent"), None);
    }

    #[test]
    fn test_float_count_truncates() {
        let f = match json!({ "views": 45.9 }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        assert_eq!(u64_field(&f, "views"), 45);
    }
}
