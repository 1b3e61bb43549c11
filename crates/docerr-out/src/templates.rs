//! Message catalog for docerr-out.
//!
//! The built-in catalog covers every `ErrorKind`. A YAML file can override
//! any subset of it:
//!
//! ```yaml
//! version: "1.0"
//! messages:
//!   required:
//!     description: Missing required attribute
//!     template: "{{name}} is required."
//!   max:
//!     template: "{{name}} is too large."
//!     date_template: "{{name}} is too late."
//! ```
//!
//! Templates use Handlebars syntax with `{{name}}` (display name) and
//! `{{value}}` (offending value as text).

use docerr_core::{DocErrError, ErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level catalog file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    #[serde(default)]
    pub messages: HashMap<String, MessageTemplate>,
}

/// Message template for one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    #[serde(default)]
    pub description: Option<String>,
    pub template: String,
    /// Used instead of `template` when the value is a date (`max`, `min`)
    #[serde(default)]
    pub date_template: Option<String>,
}

impl MessageTemplate {
    fn builtin(template: &str, date_template: Option<&str>) -> Self {
        Self {
            description: None,
            template: template.to_string(),
            date_template: date_template.map(str::to_string),
        }
    }
}

impl TemplatesFile {
    /// Load a catalog file from disk
    pub fn load(path: &str) -> Result<Self, DocErrError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocErrError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, DocErrError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| DocErrError::CatalogError(format!("invalid catalog YAML: {}", e)))
    }
}

/// Default template for a kind: (template, date template)
fn default_template(kind: ErrorKind) -> (&'static str, Option<&'static str>) {
    match kind {
        ErrorKind::Boolean => (r#""{{name}}" must be a boolean."#, None),
        ErrorKind::Buffer => (r#""{{name}}" must be a buffer."#, None),
        ErrorKind::Date => (r#""{{name}}" must be a date."#, None),
        ErrorKind::Enum => (r#""{{value}}" is an invalid value for the attribute "{{name}}"."#, None),
        ErrorKind::Max => (
            r#""{{name}}" is greater than the maximum allowed value."#,
            Some(r#""{{name}}" is after the maximum allowed date."#),
        ),
        ErrorKind::MaxLength => (r#""{{name}}" is longer than the maximum allowed length."#, None),
        ErrorKind::Min => (
            r#""{{name}}" is less than the minimum allowed value."#,
            Some(r#""{{name}}" is before the minimum allowed date."#),
        ),
        ErrorKind::MinLength => (r#""{{name}}" is shorter than the minimum allowed length."#, None),
        ErrorKind::Number => (r#""{{name}}" must be a number."#, None),
        ErrorKind::ObjectId => (r#""{{name}}" must be an identifier."#, None),
        ErrorKind::Required => (r#""{{name}}" is Required."#, None),
        ErrorKind::Unique => (r#"{{name}} "{{value}}" already exists."#, None),
        ErrorKind::CastError => (r#"{{value}} with the provided "{{name}}" doesn't exist."#, None),
    }
}

/// Complete kind → template mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: HashMap<ErrorKind, MessageTemplate>,
}

impl MessageCatalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        let templates = ErrorKind::ALL
            .iter()
            .map(|&kind| {
                let (template, date_template) = default_template(kind);
                (kind, MessageTemplate::builtin(template, date_template))
            })
            .collect();
        Self { templates }
    }

    /// Built-in catalog with a file's overrides applied
    pub fn from_file(file: &TemplatesFile) -> Result<Self, DocErrError> {
        Self::builtin().with_overrides(file)
    }

    /// Built-in catalog with the overrides from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, DocErrError> {
        Self::from_file(&TemplatesFile::from_yaml(yaml)?)
    }

    /// Built-in catalog with the overrides from a YAML file
    pub fn load(path: &str) -> Result<Self, DocErrError> {
        Self::from_file(&TemplatesFile::load(path)?)
    }

    /// Replace templates named in `file`. Unknown keys are rejected, as are
    /// date templates on kinds that never render dates.
    pub fn with_overrides(mut self, file: &TemplatesFile) -> Result<Self, DocErrError> {
        for (key, template) in &file.messages {
            let kind = ErrorKind::from_key(key).ok_or_else(|| DocErrError::UnknownKind(key.clone()))?;
            if template.date_template.is_some() && !kind.has_date_variant() {
                return Err(DocErrError::CatalogError(format!(
                    "{}: date_template is only used by max and min",
                    key
                )));
            }
            self.templates.insert(kind, template.clone());
        }
        Ok(self)
    }

    /// Template for a kind
    pub fn get(&self, kind: ErrorKind) -> &MessageTemplate {
        // builtin() fills every kind and overrides only replace entries
        &self.templates[&kind]
    }

    /// Kinds in catalog order
    pub fn kinds(&self) -> impl Iterator<Item = (ErrorKind, &MessageTemplate)> + '_ {
        ErrorKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_kind() {
        let catalog = MessageCatalog::builtin();
        assert_eq!(catalog.kinds().count(), ErrorKind::ALL.len());
        for (kind, template) in catalog.kinds() {
            assert!(template.template.contains("{{name}}"), "{} has no name slot", kind);
            assert_eq!(template.date_template.is_some(), kind.has_date_variant());
        }
    }

    #[test]
    fn test_override_single_kind() {
        let yaml = r#"
version: "1.0"
messages:
  required:
    description: Shorter wording
    template: "{{name}} is missing."
"#;
        let catalog = MessageCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.get(ErrorKind::Required).template, "{{name}} is missing.");
        assert_eq!(catalog.get(ErrorKind::Boolean), MessageCatalog::builtin().get(ErrorKind::Boolean));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
version: "1.0"
messages:
  maxlength:
    template: "{{name}} is too long."
"#;
        let err = MessageCatalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, DocErrError::UnknownKind(ref key) if key == "maxlength"));
    }

    #[test]
    fn test_date_template_on_plain_kind_rejected() {
        let yaml = r#"
version: "1.0"
messages:
  number:
    template: "{{name}} must be a number."
    date_template: "{{name}} is a date."
"#;
        assert!(matches!(
            MessageCatalog::from_yaml(yaml),
            Err(DocErrError::CatalogError(_))
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = TemplatesFile::from_yaml("version: \"1.0\"\n").unwrap();
        assert!(file.messages.is_empty());
        assert_eq!(MessageCatalog::from_file(&file).unwrap(), MessageCatalog::builtin());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            TemplatesFile::from_yaml("messages: [not, a, map]"),
            Err(DocErrError::CatalogError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = TemplatesFile::load("/nonexistent/catalog.yaml").unwrap_err();
        assert!(err.to_string().starts_with("IO//nonexistent/catalog.yaml"));
    }
}
