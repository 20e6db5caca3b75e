//! Helpers for reading candidates out of `serde_json::Value`.
//!
//! Schemas accept arbitrary JSON. These functions classify and extract the
//! parts a family needs without ever panicking on the wrong shape.
//!
//! # Examples
//!
//! ```
//! use formfield_validator::json::{field, scalar_text, type_name};
//! use serde_json::json;
//!
//! let date = json!({"month": 2, "day": "29"});
//! assert_eq!(scalar_text(field(&date, "month")).as_deref(), Some("2"));
//! assert_eq!(scalar_text(field(&date, "day")).as_deref(), Some("29"));
//! assert!(field(&date, "year").is_null());
//! assert_eq!(type_name(&date), "object");
//! ```

use std::borrow::Cow;

use serde_json::Value;

static NULL: Value = Value::Null;

/// JSON type name of a value, for diagnostics.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Member `key` of an object.
///
/// Missing keys and non-object containers both yield `null`, which every
/// schema treats as absent.
#[must_use]
pub fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&NULL)
}

/// Returns `true` for `null` and the empty string.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text of a string or number; `None` for every other type.
///
/// Numbers are rendered the way `serde_json` prints them, so `2` becomes
/// `"2"` and `2.5` becomes `"2.5"`.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!([])), "array");
        assert_eq!(type_name(&json!({})), "object");
    }

    #[test]
    fn test_field_lookup_never_panics() {
        assert_eq!(field(&json!({"a": 1}), "a"), &json!(1));
        assert!(field(&json!({"a": 1}), "b").is_null());
        assert!(field(&json!("text"), "a").is_null());
        assert!(field(&json!([1, 2]), "0").is_null());
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(!is_blank(&json!(" ")));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!([])));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("07")).as_deref(), Some("07"));
        assert_eq!(scalar_text(&json!(7)).as_deref(), Some("7"));
        assert_eq!(scalar_text(&json!(true)), None);
        assert_eq!(scalar_text(&json!(null)), None);
    }
}
