//! Display-name helpers.
//!
//! Attribute names show up in messages as-is, capitalized, humanized, or
//! both. The transforms run as a small ordered pipeline so the
//! composition order stays explicit:
//!
//! ```text
//! firstName ─ capitalize → FirstName ─ humanize → First name
//! ```

use docerr_core::RenderOptions;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lower-case letter or digit followed by an upper-case letter
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();

    /// Acronym followed by a capitalized word ("HTTPServer")
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();

    /// Runs of separators
    static ref SEPARATORS: Regex = Regex::new(r"[_\-\s]+").unwrap();
}

/// Upper-case the first character, leave the rest unchanged
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an identifier into a readable phrase.
///
/// Splits camelCase, snake_case and kebab-case boundaries, trims, and
/// lower-cases every word after the first. The first word keeps its case.
pub fn humanize(text: &str) -> String {
    let spaced = ACRONYM_BOUNDARY.replace_all(text, "$1 $2");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let spaced = SEPARATORS.replace_all(&spaced, " ");

    let mut words = spaced.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out = first.to_string();
    for word in words {
        out.push(' ');
        out.push_str(&word.to_lowercase());
    }
    out
}

/// One display-name transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStep {
    Capitalize,
    Humanize,
}

impl NameStep {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameStep::Capitalize => capitalize(name),
            NameStep::Humanize => humanize(name),
        }
    }
}

/// Ordered list of display-name transforms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePipeline {
    steps: Vec<NameStep>,
}

impl NamePipeline {
    /// Empty pipeline (names pass through untouched)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn then(mut self, step: NameStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Pipeline for a set of render options: capitalize first, then humanize
    pub fn from_options(options: &RenderOptions) -> Self {
        let mut pipeline = Self::new();
        if options.capitalize {
            pipeline = pipeline.then(NameStep::Capitalize);
        }
        if options.humanize {
            pipeline = pipeline.then(NameStep::Humanize);
        }
        pipeline
    }

    pub fn steps(&self) -> &[NameStep] {
        &self.steps
    }

    /// Run every step in order
    pub fn apply(&self, name: &str) -> String {
        self.steps
            .iter()
            .fold(name.to_string(), |current, step| step.apply(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("email"), "Email");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("Email"), "Email");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_humanize_camel_case() {
        assert_eq!(humanize("firstName"), "first name");
        assert_eq!(humanize("FirstName"), "First name");
        assert_eq!(humanize("userID"), "user id");
        assert_eq!(humanize("HTTPServer"), "HTTP server");
    }

    #[test]
    fn test_humanize_separators() {
        assert_eq!(humanize("first_name"), "first name");
        assert_eq!(humanize("users_email"), "users email");
        assert_eq!(humanize("date-of-birth"), "date of birth");
        assert_eq!(humanize("  _padded_  "), "padded");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_pipeline_order() {
        let opts = RenderOptions::new(true, true);
        let pipeline = NamePipeline::from_options(&opts);
        assert_eq!(pipeline.steps(), &[NameStep::Capitalize, NameStep::Humanize]);
        assert_eq!(pipeline.apply("firstName"), "First name");
        assert_eq!(pipeline.apply("first_name"), "First name");
    }

    #[test]
    fn test_pipeline_single_steps() {
        let capitalize_only = NamePipeline::from_options(&RenderOptions::new(true, false));
        assert_eq!(capitalize_only.apply("first_name"), "First_name");

        let humanize_only = NamePipeline::from_options(&RenderOptions::new(false, true));
        assert_eq!(humanize_only.apply("first_name"), "first name");
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = NamePipeline::from_options(&RenderOptions::default());
        assert!(pipeline.steps().is_empty());
        assert_eq!(pipeline.apply("first_name"), "first_name");
    }
}
