//! Error shape detection.
//!
//! Reads a serialized error document and decides which of the known shapes
//! it has. Discriminators are checked in a fixed priority order and the
//! first match wins:
//!
//! 1. `ValidationError` with an `errors` object
//! 2. driver error with duplicate-key code 11000 / 11001
//! 3. `CastError`
//! 4. anything with a non-empty `message`
//! 5. anything else

use docerr_core::FieldValue;
use serde_json::{Map, Value};

/// Driver error names that can carry a duplicate-key code
pub const DRIVER_ERROR_NAMES: &[&str] = &[
    "MongoError",
    "MongoServerError",
    "BulkWriteError",
    "MongoBulkWriteError",
];

/// Duplicate-key error codes
pub const DUPLICATE_KEY_CODES: &[i64] = &[11000, 11001];

/// A per-attribute failure inside a validation error
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeFailure {
    pub attribute: String,
    /// Source kind tag, `""` when absent
    pub kind: String,
    pub value: FieldValue,
    /// Message supplied by the mapping layer, `""` when absent
    pub message: String,
}

/// The recognized shapes of an error document
#[derive(Debug, Clone, PartialEq)]
pub enum RawError {
    /// Schema validation, one failure per attribute in source order
    Validation(Vec<AttributeFailure>),
    /// Unique index violation with its diagnostic text
    DuplicateKey { diagnostic: String },
    /// Failed type conversion
    Cast { path: String, kind: String, message: String },
    /// Anything carrying a message
    Generic { message: String },
    /// No usable fields; holds the document's text form
    Opaque(String),
    /// `null`
    Empty,
}

impl RawError {
    /// Detect the shape of an error document
    pub fn from_value(error: &Value) -> Self {
        let obj = match error {
            Value::Null => return RawError::Empty,
            Value::Object(obj) => obj,
            other => return RawError::Opaque(text_form(other)),
        };

        let name = str_field(obj, "name");

        if name == Some("ValidationError") {
            if let Some(Value::Object(errors)) = obj.get("errors") {
                return RawError::Validation(
                    errors
                        .iter()
                        .map(|(attribute, record)| attribute_failure(attribute, record))
                        .collect(),
                );
            }
        }

        if name.is_some_and(|n| DRIVER_ERROR_NAMES.contains(&n)) && has_duplicate_key_code(obj) {
            let diagnostic = str_field(obj, "message")
                .or_else(|| str_field(obj, "errmsg"))
                .unwrap_or_default();
            return RawError::DuplicateKey {
                diagnostic: diagnostic.to_string(),
            };
        }

        if name == Some("CastError") {
            return RawError::Cast {
                path: str_field(obj, "path").unwrap_or_default().to_string(),
                kind: str_field(obj, "kind").unwrap_or_default().to_string(),
                message: str_field(obj, "message").unwrap_or_default().to_string(),
            };
        }

        match str_field(obj, "message") {
            Some(message) if !message.is_empty() => RawError::Generic {
                message: message.to_string(),
            },
            _ => RawError::Opaque(text_form(error)),
        }
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            RawError::Validation(_) => "validation",
            RawError::DuplicateKey { .. } => "duplicate_key",
            RawError::Cast { .. } => "cast",
            RawError::Generic { .. } => "generic",
            RawError::Opaque(_) => "opaque",
            RawError::Empty => "empty",
        }
    }
}

fn attribute_failure(attribute: &str, record: &Value) -> AttributeFailure {
    let field = |key: &str| record.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
    AttributeFailure {
        attribute: attribute.to_string(),
        kind: field("kind"),
        value: record.get("value").map(FieldValue::from_json).unwrap_or_default(),
        message: field("message"),
    }
}

fn has_duplicate_key_code(obj: &Map<String, Value>) -> bool {
    let Some(code) = obj.get("code") else {
        return false;
    };
    let code = match code.as_i64() {
        Some(code) => code,
        // Codes that went through a float (11000.0)
        None => match code.as_f64() {
            Some(f) if f.fract() == 0.0 => f as i64,
            _ => return false,
        },
    };
    DUPLICATE_KEY_CODES.contains(&code)
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

/// Text form of an unrecognized document: a string's own text, otherwise compact JSON
fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_shape_keeps_order() {
        let error = json!({
            "name": "ValidationError",
            "errors": {
                "zeta": { "kind": "required", "message": "Path `zeta` is required." },
                "alpha": { "kind": "maxlength", "value": "aaaa" },
                "mid": { "kind": "enum", "value": "purple" }
            }
        });

        let RawError::Validation(failures) = RawError::from_value(&error) else {
            panic!("expected validation shape");
        };
        let names: Vec<_> = failures.iter().map(|f| f.attribute.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(failures[0].message, "Path `zeta` is required.");
        assert_eq!(failures[1].message, "");
        assert_eq!(failures[2].value, FieldValue::from_json(&json!("purple")));
    }

    #[test]
    fn test_validation_without_errors_falls_through() {
        let error = json!({ "name": "ValidationError", "message": "Validation failed" });
        assert_eq!(
            RawError::from_value(&error),
            RawError::Generic { message: "Validation failed".to_string() }
        );
    }

    #[test]
    fn test_duplicate_key_shape() {
        for name in DRIVER_ERROR_NAMES {
            let error = json!({ "name": name, "code": 11000, "message": "dup" });
            assert_eq!(
                RawError::from_value(&error),
                RawError::DuplicateKey { diagnostic: "dup".to_string() }
            );
        }

        let error = json!({ "name": "MongoError", "code": 11001.0, "errmsg": "legacy" });
        assert_eq!(
            RawError::from_value(&error),
            RawError::DuplicateKey { diagnostic: "legacy".to_string() }
        );
    }

    #[test]
    fn test_driver_error_with_other_code_is_generic() {
        let error = json!({ "name": "MongoError", "code": 121, "message": "Document failed validation" });
        assert_eq!(RawError::from_value(&error).label(), "generic");

        let error = json!({ "name": "MongoError", "code": "11000", "message": "stringly typed" });
        assert_eq!(RawError::from_value(&error).label(), "generic");
    }

    #[test]
    fn test_cast_shape() {
        let error = json!({
            "name": "CastError",
            "kind": "ObjectId",
            "path": "owner",
            "message": "Cast to ObjectId failed"
        });
        assert_eq!(
            RawError::from_value(&error),
            RawError::Cast {
                path: "owner".to_string(),
                kind: "ObjectId".to_string(),
                message: "Cast to ObjectId failed".to_string(),
            }
        );
    }

    #[test]
    fn test_fallback_shapes() {
        assert_eq!(RawError::from_value(&json!(null)), RawError::Empty);
        assert_eq!(RawError::from_value(&json!("plain text")), RawError::Opaque("plain text".to_string()));
        assert_eq!(RawError::from_value(&json!(42)), RawError::Opaque("42".to_string()));
        assert_eq!(
            RawError::from_value(&json!({ "message": "" })),
            RawError::Opaque(r#"{"message":""}"#.to_string())
        );
        assert_eq!(
            RawError::from_value(&json!({ "status": 500 })),
            RawError::Opaque(r#"{"status":500}"#.to_string())
        );
    }
}
