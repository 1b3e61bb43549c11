//! docerr Core: shared data model for error normalization
//!
//! Types shared by the classifier (`docerr-in`), the message renderer
//! (`docerr-out`) and the public facade (`docerr`).

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod options;
pub mod value;

pub use descriptor::ErrorDescriptor;
pub use error::DocErrError;
pub use kind::ErrorKind;
pub use options::{parse_options, RenderOptions};
pub use value::FieldValue;

/// Engine version
pub const DOCERR_VERSION: &str = env!("CARGO_PKG_VERSION");
