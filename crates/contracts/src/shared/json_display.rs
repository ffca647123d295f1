//! Helpers for showing untyped service payloads as labelled rows

use serde_json::Value;

/// "competitor_products" -> "Competitor products"
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text for leaf values; `None` for objects and arrays, which are nested
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("-".to_string()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Child entries of a container value, labelled for display.
///
/// Array items are numbered from 1.
pub fn entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (humanize_key(k), v.clone()))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("#{}", i + 1), v.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("competitor_products"), "Competitor products");
        assert_eq!(humanize_key("roi"), "Roi");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!(42.5)).as_deref(), Some("42.5"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("Yes"));
        assert_eq!(scalar_text(&json!(null)).as_deref(), Some("-"));
        assert_eq!(scalar_text(&json!("viable")).as_deref(), Some("viable"));
        assert_eq!(scalar_text(&json!({ "a": 1 })), None);
    }

    #[test]
    fn test_entries() {
        let object = entries(&json!({ "profit_margin": 42, "is_viable": true }));
        assert_eq!(object.len(), 2);
        assert!(object.iter().any(|(k, _)| k == "Profit margin"));

        let array = entries(&json!(["a", "b"]));
        assert_eq!(array[1], ("#2".to_string(), json!("b")));

        assert!(entries(&json!(7)).is_empty());
    }
}
