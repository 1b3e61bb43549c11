//! docerr-out: failures to human-readable messages
//!
//! This crate owns the message catalog and the render step that turns a
//! (kind, name, value, fallback) tuple into an `ErrorDescriptor`.
//!
//! # Example
//!
//! ```ignore
//! use docerr_core::{ErrorKind, FieldValue, RenderOptions};
//! use docerr_out::MessageRenderer;
//!
//! let renderer = MessageRenderer::builtin()?;
//! let descriptor = renderer.describe(
//!     Some(ErrorKind::Required),
//!     "email",
//!     &FieldValue::default(),
//!     "Path `email` is required.",
//!     &RenderOptions::new(true, false),
//! );
//! assert_eq!(descriptor.message, "\"Email\" is Required.");
//! ```

pub mod renderer;
pub mod templates;

pub use renderer::MessageRenderer;
pub use templates::{MessageCatalog, MessageTemplate, TemplatesFile};

/// Reference catalog path, relative to the workspace root
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/error-messages.yaml";
