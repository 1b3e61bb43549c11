//! Render options: display-name toggles
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Controls how attribute names appear inside rendered messages.
/// The descriptor `field` is never affected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Upper-case the first character of the name
    #[serde(alias = "capitalize_option")]
    pub capitalize: bool,
    /// Split identifier-style names into spaced words
    #[serde(alias = "humanize_option")]
    pub humanize: bool,
}

impl RenderOptions {
    pub fn new(capitalize: bool, humanize: bool) -> Self {
        Self { capitalize, humanize }
    }
}

/// Normalize a loose options document into `RenderOptions`.
///
/// Absent input, non-object input and missing keys all default to `false`.
/// Booleans are taken as-is; other scalars count when truthy
/// (non-zero numbers, non-empty strings).
pub fn parse_options(raw: Option<&Value>) -> RenderOptions {
    let Some(Value::Object(map)) = raw else {
        return RenderOptions::default();
    };

    let flag = |short: &str, long: &str| {
        map.get(short)
            .or_else(|| map.get(long))
            .map(is_truthy)
            .unwrap_or(false)
    };

    RenderOptions {
        capitalize: flag("capitalize", "capitalize_option"),
        humanize: flag("humanize", "humanize_option"),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
