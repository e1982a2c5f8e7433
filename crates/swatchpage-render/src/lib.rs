//! # Swatchpage Render - HTML Swatch Pages
//!
//! `swatchpage-render` turns categorized palette colors into a single
//! self-contained HTML page: one swatch per color, grouped into primary,
//! text and accent sections, with labels tinted for contrast.
//!
//! This crate is the rendering half of the `swatchpage` tool. It knows nothing
//! about stylesheets; callers hand it a [`RenderContext`].
//!
//! ## Core Concepts
//!
//! - [`ColorVariable`]: a custom property name and its hex value
//! - [`RenderContext`]: header labels plus the three color lists
//! - [`PaletteRenderer`]: the compiled page template
//! - [`color::LabelTone`]: dark or light label, chosen by BT.601 luma
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchpage_render::{ColorVariable, PaletteRenderer, RenderContext};
//!
//! let ctx = RenderContext::new()
//!     .with_mode("dark")
//!     .with_colors(
//!         vec![ColorVariable::new("--pry-bg", "#1a1a1a")],
//!         vec![ColorVariable::new("--txt-main", "#eeeeee")],
//!         vec![ColorVariable::new("--xa-1", "#ff0000")],
//!     );
//!
//! let html = PaletteRenderer::new().unwrap().render(&ctx).unwrap();
//! assert!(html.contains("--txt-main"));
//! ```

pub mod color;
mod context;
mod error;
pub mod template;

pub use context::{ColorVariable, RenderContext, UNKNOWN_LABEL};
pub use error::RenderError;
pub use template::{MiniJinjaEngine, PaletteRenderer, TemplateEngine};
