//! Message rendering for docerr-out.
//!
//! Uses Handlebars with HTML escaping off (messages are plain text, and
//! the built-in templates quote with `"`). Helpers available to catalog
//! templates:
//! - capitalize: upper-case the first character
//! - humanize: split an identifier into spaced words
//! - upper / lower: change case

use docerr_core::{DocErrError, ErrorDescriptor, ErrorKind, FieldValue, RenderOptions};
use docerr_naming::NamePipeline;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::json;
use tracing::{debug, warn};

use crate::templates::MessageCatalog;

handlebars_helper!(capitalize_helper: |s: str| docerr_naming::capitalize(s));
handlebars_helper!(humanize_helper: |s: str| docerr_naming::humanize(s));
handlebars_helper!(upper_helper: |s: str| s.to_uppercase());
handlebars_helper!(lower_helper: |s: str| s.to_lowercase());

/// Compiled message renderer
pub struct MessageRenderer {
    handlebars: Handlebars<'static>,
    catalog: MessageCatalog,
}

impl MessageRenderer {
    /// Compile every template in a catalog
    pub fn new(catalog: MessageCatalog) -> Result<Self, DocErrError> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("capitalize", Box::new(capitalize_helper));
        handlebars.register_helper("humanize", Box::new(humanize_helper));
        handlebars.register_helper("upper", Box::new(upper_helper));
        handlebars.register_helper("lower", Box::new(lower_helper));

        for (kind, template) in catalog.kinds() {
            register(&mut handlebars, kind.key().to_string(), &template.template)?;
            if let Some(date_template) = &template.date_template {
                register(&mut handlebars, date_template_name(kind), date_template)?;
            }
        }

        Ok(MessageRenderer { handlebars, catalog })
    }

    /// Renderer for the built-in catalog
    pub fn builtin() -> Result<Self, DocErrError> {
        Self::new(MessageCatalog::builtin())
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Render the message for a kind with an already-transformed display name
    pub fn render(&self, kind: ErrorKind, display_name: &str, value: &FieldValue) -> Result<String, DocErrError> {
        let use_date = value.is_date() && self.catalog.get(kind).date_template.is_some();
        let template_name = if use_date {
            date_template_name(kind)
        } else {
            kind.key().to_string()
        };

        let data = json!({
            "name": display_name,
            "value": value.display_text(),
        });

        self.handlebars
            .render(&template_name, &data)
            .map_err(|e| DocErrError::TemplateError {
                name: template_name,
                reason: e.to_string(),
            })
    }

    /// Render step: build the descriptor for one failure.
    ///
    /// `field` always carries `name` untouched; the message uses the display
    /// name produced by `options`. Unknown kinds and render failures fall
    /// back to `fallback` verbatim.
    pub fn describe(
        &self,
        kind: Option<ErrorKind>,
        name: &str,
        value: &FieldValue,
        fallback: &str,
        options: &RenderOptions,
    ) -> ErrorDescriptor {
        let Some(kind) = kind else {
            debug!(field = name, "no template for kind, using source message");
            return ErrorDescriptor::new(name, fallback);
        };

        let display_name = NamePipeline::from_options(options).apply(name);
        let message = match self.render(kind, &display_name, value) {
            Ok(message) => message,
            Err(e) => {
                warn!(field = name, error = %e, "message render failed, using source message");
                fallback.to_string()
            }
        };

        ErrorDescriptor::new(name, message)
    }
}

fn date_template_name(kind: ErrorKind) -> String {
    format!("{}_date", kind.key())
}

fn register(handlebars: &mut Handlebars<'static>, name: String, template: &str) -> Result<(), DocErrError> {
    handlebars
        .register_template_string(&name, template)
        .map_err(|e| DocErrError::TemplateError {
            name,
            reason: e.to_string(),
        })
}
