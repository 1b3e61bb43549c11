//! Offending values carried by a failure.
//!
//! Serialized errors lose the runtime type of their values, so dates are
//! recovered from the two encodings that survive JSON:
//! - an RFC 3339 string (`"2020-01-01T00:00:00.000Z"`)
//! - an extended-JSON wrapper (`{"$date": "..."}`, `{"$date": 1577836800000}`,
//!   `{"$date": {"$numberLong": "1577836800000"}}`)

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A date, with the text it was read from
    Date { at: DateTime<FixedOffset>, text: String },
    /// Anything else
    Json(Value),
}

impl FieldValue {
    /// Interpret a raw JSON value
    pub fn from_json(value: &Value) -> Self {
        match parse_date(value) {
            Some((at, text)) => FieldValue::Date { at, text },
            None => FieldValue::Json(value.clone()),
        }
    }

    /// Plain text value (used for values pulled out of diagnostic strings)
    pub fn text(text: impl Into<String>) -> Self {
        FieldValue::Json(Value::String(text.into()))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FieldValue::Date { .. })
    }

    /// Text used when the value appears inside a message.
    ///
    /// Strings render verbatim, `null` renders empty, other JSON renders compact.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Date { text, .. } => text.clone(),
            FieldValue::Json(Value::String(s)) => s.clone(),
            FieldValue::Json(Value::Null) => String::new(),
            FieldValue::Json(other) => other.to_string(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Json(Value::Null)
    }
}

fn parse_date(value: &Value) -> Option<(DateTime<FixedOffset>, String)> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s).ok().map(|at| (at, s.clone())),
        Value::Object(map) if map.len() == 1 => match map.get("$date")? {
            Value::String(s) => DateTime::parse_from_rfc3339(s).ok().map(|at| (at, s.clone())),
            Value::Number(n) => from_millis(n.as_i64()?),
            Value::Object(inner) => {
                let millis = inner.get("$numberLong")?.as_str()?.parse::<i64>().ok()?;
                from_millis(millis)
            }
            _ => None,
        },
        _ => None,
    }
}

fn from_millis(millis: i64) -> Option<(DateTime<FixedOffset>, String)> {
    let at = DateTime::from_timestamp_millis(millis)?.fixed_offset();
    let text = at.to_rfc3339_opts(SecondsFormat::Millis, true);
    Some((at, text))
}
