//! # Swatchpage - Palette Pages from Stylesheets
//!
//! Swatchpage reads the color custom properties declared in a stylesheet's
//! `:root` block and renders them as a static HTML swatch page.
//!
//! A run is one straight pass:
//!
//! 1. [`extract`]: scan the first `:root` block into a [`PaletteMapping`]
//! 2. [`categorize`]: split it into primary (`--pry*`), text (`--txt*`) and
//!    accent (`--xa*`) colors
//! 3. [`PaletteRenderer`]: fill the page template and write the file
//!
//! [`generate`] runs all three for a [`Config`]. Header labels come from
//! the config when set, then from `/* Wallpaper: ... */` and
//! `/* Mode: ... */` comments above the block, then fall back to
//! [`swatchpage_render::UNKNOWN_LABEL`].
//!
//! ```rust,no_run
//! use swatchpage::{generate, Config};
//!
//! let config = Config::new("theme.css").with_output("preview.html");
//! let summary = generate(&config)?;
//! println!("{} swatches", summary.swatches);
//! # Ok::<(), swatchpage::PaletteError>(())
//! ```

pub mod classify;
pub mod cli;
mod error;
pub mod extract;
mod palette;

use std::path::{Path, PathBuf};

pub use classify::{categorize, CategorizedPalette, Category};
pub use error::PaletteError;
pub use extract::{extract, extract_file, extract_reader, Extraction, SkippedDeclaration};
pub use palette::PaletteMapping;
pub use swatchpage_render::{ColorVariable, PaletteRenderer, RenderContext, RenderError};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "palette.html";

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub css: PathBuf,
    pub output: PathBuf,
    /// Overrides the stylesheet's wallpaper comment.
    pub wallpaper: Option<String>,
    /// Overrides the stylesheet's mode comment.
    pub mode: Option<String>,
}

impl Config {
    /// Config for `css` with the default output path and no label overrides.
    pub fn new(css: impl Into<PathBuf>) -> Self {
        Self {
            css: css.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            wallpaper: None,
            mode: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_wallpaper(mut self, wallpaper: impl Into<String>) -> Self {
        self.wallpaper = Some(wallpaper.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    /// Colors extracted from the stylesheet.
    pub extracted: usize,
    /// Colors shown on the page.
    pub swatches: usize,
}

/// Extracts, categorizes and renders `config.css` into `config.output`.
///
/// # Errors
///
/// Extraction errors as documented on [`extract`];
/// [`PaletteError::Template`] if the page template cannot be prepared;
/// [`PaletteError::Output`] if the page cannot be rendered or written.
pub fn generate(config: &Config) -> Result<Summary, PaletteError> {
    let extraction = extract_file(&config.css)?;
    let wallpaper = header_label(config.wallpaper.as_deref(), extraction.wallpaper.as_deref());
    let mode = header_label(config.mode.as_deref(), extraction.mode.as_deref());
    let mapping = extraction.into_mapping()?;
    let palette = categorize(&mapping);
    tracing::debug!(
        primary = palette.primary.len(),
        text = palette.text.len(),
        accents = palette.accents.len(),
        dropped = mapping.len() - palette.total(),
        "categorized palette"
    );

    let ctx = palette.into_context(wallpaper, mode);
    let swatches = ctx.swatch_count();

    let renderer = PaletteRenderer::new().map_err(PaletteError::Template)?;
    write_page(&renderer, &ctx, &config.output)?;
    tracing::info!(output = %config.output.display(), swatches, "wrote palette page");

    Ok(Summary {
        output: config.output.clone(),
        extracted: mapping.len(),
        swatches,
    })
}

fn header_label(flag: Option<&str>, comment: Option<&str>) -> String {
    flag.or(comment)
        .unwrap_or(swatchpage_render::UNKNOWN_LABEL)
        .to_string()
}

fn write_page(renderer: &PaletteRenderer, ctx: &RenderContext, path: &Path) -> Result<(), PaletteError> {
    renderer
        .write_to(ctx, path)
        .map_err(|source| PaletteError::Output {
            path: path.to_path_buf(),
            source,
        })
}
