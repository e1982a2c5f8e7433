//! Pre-compiled page renderer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::page::{PAGE_TEMPLATE, PAGE_TEMPLATE_NAME};
use crate::context::RenderContext;
use crate::error::RenderError;

/// A renderer with the swatch page compiled in.
///
/// # Example
///
/// ```rust
/// use swatchpage_render::{ColorVariable, PaletteRenderer, RenderContext};
///
/// let renderer = PaletteRenderer::new().unwrap();
/// let ctx = RenderContext::new().with_colors(
///     vec![ColorVariable::new("--pry-bg", "#1a1a1a")],
///     vec![],
///     vec![],
/// );
/// let html = renderer.render(&ctx).unwrap();
/// assert!(html.contains("background-color: #1a1a1a"));
/// ```
pub struct PaletteRenderer {
    engine: Box<dyn TemplateEngine>,
}

impl PaletteRenderer {
    /// Creates a renderer backed by MiniJinja.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateError`] if the page template does not
    /// compile.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_engine(Box::new(MiniJinjaEngine::new()))
    }

    /// Creates a renderer on a caller-supplied engine and registers the page
    /// template with it.
    pub fn with_engine(mut engine: Box<dyn TemplateEngine>) -> Result<Self, RenderError> {
        engine.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Renders the page for `ctx`.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let data = serde_json::to_value(ctx)?;
        self.engine.render_named(PAGE_TEMPLATE_NAME, &data)
    }

    /// Renders the page for `ctx` into `writer` and flushes it.
    ///
    /// Write and flush failures are returned as [`RenderError::IoError`].
    pub fn render_into<W: Write>(&self, ctx: &RenderContext, mut writer: W) -> Result<(), RenderError> {
        let html = self.render(ctx)?;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders the page for `ctx` and writes it to `path`, replacing any
    /// existing file.
    ///
    /// Rendering happens before the file is created, so a rendering failure
    /// leaves no partial output behind. A file that cannot be created is
    /// [`RenderError::CreateError`]; a failure once it is open is
    /// [`RenderError::IoError`].
    pub fn write_to(&self, ctx: &RenderContext, path: &Path) -> Result<(), RenderError> {
        let html = self.render(ctx)?;
        let file = File::create(path).map_err(RenderError::CreateError)?;
        let mut out = BufWriter::new(file);
        out.write_all(html.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
