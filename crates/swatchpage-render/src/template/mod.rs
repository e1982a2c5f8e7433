//! Template rendering for the swatch page.
//!
//! The page is a single embedded MiniJinja template ([`page::PAGE_TEMPLATE`])
//! with two scalar substitutions (`wallpaper`, `mode`) and three loops
//! (`primary`, `text`, `accents`). All interpolated values are HTML-escaped.
//!
//! ## Key Types
//!
//! - [`PaletteRenderer`]: compiles the page once and renders contexts
//! - [`TemplateEngine`]: backend abstraction, implemented by [`MiniJinjaEngine`]

mod engine;
pub mod page;
mod renderer;

pub use engine::{register_filters, MiniJinjaEngine, TemplateEngine};
pub use page::{PAGE_TEMPLATE, PAGE_TEMPLATE_NAME};
pub use renderer::PaletteRenderer;
