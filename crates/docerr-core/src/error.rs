//! Unified Error Model
//!
//! Only configuration (catalog loading) can fail. Transforming an error
//! document never does.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocErrError {
    #[error("IO/{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CATALOG/{0}")]
    CatalogError(String),

    #[error("CATALOG/UNKNOWN_KIND: {0}")]
    UnknownKind(String),

    #[error("TEMPLATE/{name}: {reason}")]
    TemplateError { name: String, reason: String },
}
