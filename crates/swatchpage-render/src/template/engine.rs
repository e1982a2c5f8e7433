//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait so the page renderer does
//! not depend on a specific backend. The default implementation is
//! [`MiniJinjaEngine`].

use minijinja::{Environment, Value};

use crate::color::LabelTone;
use crate::error::RenderError;

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and renders a template string in one step.
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// The name decides the auto-escape policy: names ending in `.html`
    /// escape every interpolated value as HTML.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// # Example
///
/// ```rust
/// use swatchpage_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("tone: {{ hex | label_tone }}", &json!({ "hex": "#000" }))
///     .unwrap();
/// assert_eq!(output, "tone: light");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with the swatch filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers the swatch filters with a MiniJinja environment.
///
/// - `label_tone`: `"dark"` or `"light"`, the label tone readable on the
///   given hex background.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("label_tone", |hex: String| -> String {
        LabelTone::for_hex(&hex).as_str().to_string()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_template_substitutes() {
        let engine = MiniJinjaEngine::new();
        let out = engine
            .render_template("{{ name }}={{ hex }}", &json!({ "name": "--xa-1", "hex": "#f00" }))
            .unwrap();
        assert_eq!(out, "--xa-1=#f00");
    }

    #[test]
    fn test_named_html_template_escapes() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("label.html", "<p>{{ label }}</p>").unwrap();
        assert!(engine.has_template("label.html"));

        let out = engine
            .render_named("label.html", &json!({ "label": "<b>&\"" }))
            .unwrap();
        assert_eq!(out, "<p>&lt;b&gt;&amp;&quot;</p>");
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let engine = MiniJinjaEngine::new();
        assert!(!engine.has_template("missing.html"));
        let err = engine.render_named("missing.html", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[test]
    fn test_syntax_error_is_template_error() {
        let mut engine = MiniJinjaEngine::new();
        let err = engine.add_template("broken.html", "{% for %}").unwrap_err();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }

    #[test]
    fn test_label_tone_filter() {
        let engine = MiniJinjaEngine::new();
        let out = engine
            .render_template(
                "{{ '#ffffff' | label_tone }} {{ '#000000' | label_tone }}",
                &json!({}),
            )
            .unwrap();
        assert_eq!(out, "dark light");
    }
}
