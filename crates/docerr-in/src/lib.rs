//! docerr-in: error documents to renderable tuples
//!
//! This crate reads a serialized error document produced by a document
//! mapping layer and turns it into an ordered list of items the renderer
//! understands.
//!
//! # Example
//!
//! ```ignore
//! use docerr_in::{classify, Classified};
//! use serde_json::json;
//!
//! let items = classify(&json!({
//!     "name": "ValidationError",
//!     "errors": { "email": { "kind": "required", "message": "Path `email` is required." } }
//! }));
//!
//! match &items[0] {
//!     Classified::Tuple(t) => println!("{} failed {}", t.attribute, t.tag),
//!     Classified::Message(m) => println!("{}", m),
//! }
//! ```

pub mod extract;
pub mod shape;

use docerr_core::{ErrorKind, FieldValue};
use serde_json::Value;
use tracing::debug;

pub use shape::{AttributeFailure, RawError};

/// A failure ready for template rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTuple {
    /// Resolved kind, `None` when the tag is not in the catalog
    pub kind: Option<ErrorKind>,
    /// Source tag as written on the error
    pub tag: String,
    /// Original attribute name
    pub attribute: String,
    pub value: FieldValue,
    /// Message to use when no template applies
    pub fallback: String,
}

impl ErrorTuple {
    /// Tuple for a kind known up front
    pub fn for_kind(kind: ErrorKind, attribute: String, value: FieldValue, fallback: String) -> Self {
        Self {
            kind: Some(kind),
            tag: kind.tag().to_string(),
            attribute,
            value,
            fallback,
        }
    }
}

/// One output item
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Render through the message catalog
    Tuple(ErrorTuple),
    /// Pass the text through untouched
    Message(String),
}

/// Classify an error document into output items, in output order
pub fn classify(error: &Value) -> Vec<Classified> {
    let raw = RawError::from_value(error);
    debug!(shape = raw.label(), "classified error document");
    into_items(raw)
}

/// Expand a detected shape into output items
pub fn into_items(raw: RawError) -> Vec<Classified> {
    match raw {
        RawError::Validation(failures) => failures
            .into_iter()
            .map(|failure| {
                Classified::Tuple(ErrorTuple {
                    kind: ErrorKind::from_tag(&failure.kind),
                    tag: failure.kind,
                    attribute: failure.attribute,
                    value: failure.value,
                    fallback: failure.message,
                })
            })
            .collect(),

        RawError::DuplicateKey { diagnostic } => {
            let attribute = extract::duplicate_key_attribute(&diagnostic);
            let value = extract::duplicate_key_value(&diagnostic);
            vec![Classified::Tuple(ErrorTuple::for_kind(
                ErrorKind::Unique,
                attribute,
                FieldValue::text(value),
                diagnostic,
            ))]
        }

        RawError::Cast { path, kind, message } => {
            if is_identifier_cast(&kind) {
                let model = extract::cast_model_name(&message);
                vec![Classified::Tuple(ErrorTuple::for_kind(
                    ErrorKind::CastError,
                    path,
                    FieldValue::text(model),
                    message,
                ))]
            } else {
                vec![Classified::Message(message)]
            }
        }

        RawError::Generic { message } => vec![Classified::Message(message)],
        RawError::Opaque(text) => vec![Classified::Message(text)],
        RawError::Empty => Vec::new(),
    }
}

fn is_identifier_cast(kind: &str) -> bool {
    ErrorKind::from_tag(kind) == Some(ErrorKind::ObjectId)
}
