//! Error kinds understood by the message catalog.
//!
//! Each kind has two names:
//! - the source tag written by the mapping layer on a failure (`maxlength`, `ObjectID`)
//! - the snake_case catalog key used in YAML message files (`max_length`, `object_id`)

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Boolean,
    Buffer,
    Date,
    Enum,
    Max,
    MaxLength,
    Min,
    MinLength,
    Number,
    ObjectId,
    Required,
    Unique,
    CastError,
}

impl ErrorKind {
    /// Every kind, in catalog order
    pub const ALL: [ErrorKind; 13] = [
        ErrorKind::Boolean,
        ErrorKind::Buffer,
        ErrorKind::Date,
        ErrorKind::Enum,
        ErrorKind::Max,
        ErrorKind::MaxLength,
        ErrorKind::Min,
        ErrorKind::MinLength,
        ErrorKind::Number,
        ErrorKind::ObjectId,
        ErrorKind::Required,
        ErrorKind::Unique,
        ErrorKind::CastError,
    ];

    /// Resolve a source tag. Tags are case-sensitive, except that both
    /// `ObjectID` and `ObjectId` name the identifier kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "Boolean" => ErrorKind::Boolean,
            "Buffer" => ErrorKind::Buffer,
            "Date" => ErrorKind::Date,
            "enum" => ErrorKind::Enum,
            "max" => ErrorKind::Max,
            "maxlength" => ErrorKind::MaxLength,
            "min" => ErrorKind::Min,
            "minlength" => ErrorKind::MinLength,
            "Number" => ErrorKind::Number,
            "ObjectID" | "ObjectId" => ErrorKind::ObjectId,
            "required" => ErrorKind::Required,
            "unique" => ErrorKind::Unique,
            "CastError" => ErrorKind::CastError,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical source tag
    pub fn tag(self) -> &'static str {
        match self {
            ErrorKind::Boolean => "Boolean",
            ErrorKind::Buffer => "Buffer",
            ErrorKind::Date => "Date",
            ErrorKind::Enum => "enum",
            ErrorKind::Max => "max",
            ErrorKind::MaxLength => "maxlength",
            ErrorKind::Min => "min",
            ErrorKind::MinLength => "minlength",
            ErrorKind::Number => "Number",
            ErrorKind::ObjectId => "ObjectID",
            ErrorKind::Required => "required",
            ErrorKind::Unique => "unique",
            ErrorKind::CastError => "CastError",
        }
    }

    /// Catalog key (matches the serde representation)
    pub fn key(self) -> &'static str {
        match self {
            ErrorKind::Boolean => "boolean",
            ErrorKind::Buffer => "buffer",
            ErrorKind::Date => "date",
            ErrorKind::Enum => "enum",
            ErrorKind::Max => "max",
            ErrorKind::MaxLength => "max_length",
            ErrorKind::Min => "min",
            ErrorKind::MinLength => "min_length",
            ErrorKind::Number => "number",
            ErrorKind::ObjectId => "object_id",
            ErrorKind::Required => "required",
            ErrorKind::Unique => "unique",
            ErrorKind::CastError => "cast_error",
        }
    }

    /// Resolve a catalog key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.key() == key)
    }

    /// Whether the kind renders differently for date-typed values
    pub fn has_date_variant(self) -> bool {
        matches!(self, ErrorKind::Max | ErrorKind::Min)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
