//! Field extraction from driver diagnostic strings.
//!
//! Duplicate-key and identifier-cast failures only describe the attribute
//! and value inside free-form text. Every extractor returns an empty string
//! when its pattern does not match, so callers always get a value.
//!
//! Expected formats:
//!
//! ```text
//! E11000 duplicate key error index: users_email_1 dup key: { : "a@b.com" }
//! Cast to ObjectId failed for value "abc" at path "owner" for model "User"
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    /// Index name following `index:`
    static ref INDEX_NAME: Regex = Regex::new(r"index:\s+(\S+)").unwrap();

    /// Key value inside `key: { : "..."`, greedy up to the last quote
    static ref DUP_KEY_VALUE: Regex = Regex::new(r#"key:\s+\{\s+:\s"(.*)""#).unwrap();

    /// Any double-quoted segment
    static ref QUOTED: Regex = Regex::new(r#""(.*?)""#).unwrap();
}

/// Logical field name of the violated index.
///
/// Index names follow `<field>_<direction>`; everything from the last
/// underscore on is dropped. A name without an underscore yields `""`.
pub fn duplicate_key_attribute(diagnostic: &str) -> String {
    let Some(index) = INDEX_NAME.captures(diagnostic).and_then(|c| c.get(1)) else {
        trace!("no index name in duplicate key diagnostic");
        return String::new();
    };
    let index = index.as_str();
    match index.rfind('_') {
        Some(pos) => index[..pos].to_string(),
        None => String::new(),
    }
}

/// Duplicated value, or `""`
pub fn duplicate_key_value(diagnostic: &str) -> String {
    match DUP_KEY_VALUE.captures(diagnostic).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => {
            trace!("no key value in duplicate key diagnostic");
            String::new()
        }
    }
}

/// Target model of an identifier cast: the inner text of the last quoted
/// segment, or `""`
pub fn cast_model_name(message: &str) -> String {
    match QUOTED.captures_iter(message).last().and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => {
            trace!("no quoted model name in cast message");
            String::new()
        }
    }
}
