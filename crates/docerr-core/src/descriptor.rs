//! Output unit of a transform
use serde::{Deserialize, Serialize};

/// A single field-level error, ready for an API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Original attribute name, empty when the failure is not tied to one
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Descriptor carrying a message only
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }
}
