//! docerr: uniform field-level messages for document-mapper errors
//!
//! Validation failures, duplicate-key violations and cast failures all come
//! out as the same shape:
//!
//! ```text
//! [{ "field": "email", "message": "\"Email\" is Required." }, ...]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docerr::{transform, RenderOptions};
//! use serde_json::json;
//!
//! let error = json!({
//!     "name": "ValidationError",
//!     "errors": {
//!         "email": { "kind": "required", "message": "Path `email` is required." }
//!     }
//! });
//!
//! let descriptors = transform(&error, &RenderOptions::new(true, false));
//! assert_eq!(descriptors[0].message, "\"Email\" is Required.");
//! ```
//!
//! Transforming never fails: shapes that are not recognized pass their
//! message (or their JSON text) through unchanged.

use docerr_in::{classify, Classified};
use docerr_out::MessageRenderer;
use lazy_static::lazy_static;
use serde_json::Value;
use tracing::debug;

pub use docerr_core::{parse_options, DocErrError, ErrorDescriptor, ErrorKind, FieldValue, RenderOptions};
pub use docerr_out::{MessageCatalog, MessageTemplate, TemplatesFile};

lazy_static! {
    /// Transformer over the built-in catalog
    static ref DEFAULT_TRANSFORMER: ErrorTransformer =
        ErrorTransformer::builtin().expect("built-in message catalog compiles");
}

/// Classifier and renderer wired together
pub struct ErrorTransformer {
    renderer: MessageRenderer,
}

impl ErrorTransformer {
    /// Transformer over a custom catalog
    pub fn new(catalog: MessageCatalog) -> Result<Self, DocErrError> {
        Ok(Self {
            renderer: MessageRenderer::new(catalog)?,
        })
    }

    /// Transformer over the built-in catalog
    pub fn builtin() -> Result<Self, DocErrError> {
        Self::new(MessageCatalog::builtin())
    }

    /// Transformer over the built-in catalog plus a YAML file's overrides
    pub fn load(catalog_path: &str) -> Result<Self, DocErrError> {
        Self::new(MessageCatalog::load(catalog_path)?)
    }

    pub fn catalog(&self) -> &MessageCatalog {
        self.renderer.catalog()
    }

    /// Turn an error document into descriptors, in source order
    pub fn transform(&self, error: &Value, options: &RenderOptions) -> Vec<ErrorDescriptor> {
        let descriptors: Vec<ErrorDescriptor> = classify(error)
            .into_iter()
            .map(|item| match item {
                Classified::Tuple(tuple) => self.renderer.describe(
                    tuple.kind,
                    &tuple.attribute,
                    &tuple.value,
                    &tuple.fallback,
                    options,
                ),
                Classified::Message(message) => ErrorDescriptor::message_only(message),
            })
            .collect();

        debug!(count = descriptors.len(), "transformed error document");
        descriptors
    }

    /// Like `transform`, with a loose options document
    pub fn transform_with(&self, error: &Value, raw_options: Option<&Value>) -> Vec<ErrorDescriptor> {
        self.transform(error, &parse_options(raw_options))
    }

    /// Like `transform`, for an error serialized as JSON text. Text that is
    /// not valid JSON is passed through as the message.
    pub fn transform_str(&self, error: &str, options: &RenderOptions) -> Vec<ErrorDescriptor> {
        match serde_json::from_str::<Value>(error) {
            Ok(value) => self.transform(&value, options),
            Err(e) => {
                debug!(error = %e, "error text is not JSON, passing through");
                self.transform(&Value::String(error.to_string()), options)
            }
        }
    }
}

/// Transform with the built-in catalog
pub fn transform(error: &Value, options: &RenderOptions) -> Vec<ErrorDescriptor> {
    DEFAULT_TRANSFORMER.transform(error, options)
}

/// Transform with the built-in catalog and a loose options document
pub fn transform_with(error: &Value, raw_options: Option<&Value>) -> Vec<ErrorDescriptor> {
    DEFAULT_TRANSFORMER.transform_with(error, raw_options)
}

/// Transform JSON text with the built-in catalog
pub fn transform_str(error: &str, options: &RenderOptions) -> Vec<ErrorDescriptor> {
    DEFAULT_TRANSFORMER.transform_str(error, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transformer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorTransformer>();
    }

    #[test]
    fn test_transform_with_raw_options() {
        let error = json!({
            "name": "ValidationError",
            "errors": { "first_name": { "kind": "required" } }
        });
        let descriptors = transform_with(&error, Some(&json!({ "capitalize": true, "humanize": true })));
        assert_eq!(descriptors, vec![ErrorDescriptor::new("first_name", r#""First name" is Required."#)]);
    }

    #[test]
    fn test_transform_str() {
        let text = r#"{"name":"CastError","kind":"Number","path":"age","message":"Cast to Number failed"}"#;
        assert_eq!(
            transform_str(text, &RenderOptions::default()),
            vec![ErrorDescriptor::message_only("Cast to Number failed")]
        );
        assert_eq!(
            transform_str("socket hang up", &RenderOptions::default()),
            vec![ErrorDescriptor::message_only("socket hang up")]
        );
    }

    #[test]
    fn test_custom_transformer() {
        let catalog = MessageCatalog::from_yaml(r#"
version: "1.0"
messages:
  required:
    template: "Please provide {{name}}."
"#).unwrap();
        let transformer = ErrorTransformer::new(catalog).unwrap();
        let error = json!({
            "name": "ValidationError",
            "errors": { "email": { "kind": "required" } }
        });
        assert_eq!(
            transformer.transform(&error, &RenderOptions::default())[0].message,
            "Please provide email."
        );
    }
}
