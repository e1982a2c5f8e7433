//! Values handed to the page template.
//!
//! [`RenderContext`] is built once per run and serialized straight into the
//! template, so its field names are the template's variable names:
//!
//! | Variable    | Type                   |
//! |-------------|------------------------|
//! | `wallpaper` | string                 |
//! | `mode`      | string                 |
//! | `primary`   | list of `{name, hex}`  |
//! | `text`      | list of `{name, hex}`  |
//! | `accents`   | list of `{name, hex}`  |

use serde::Serialize;

/// Label shown when no wallpaper or mode metadata is available.
pub const UNKNOWN_LABEL: &str = "N/A (from CSS comments or metadata)";

/// A single custom property color.
///
/// `name` keeps its leading `--`; `hex` is kept exactly as written in the
/// stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorVariable {
    pub name: String,
    pub hex: String,
}

impl ColorVariable {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Everything the page template binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub wallpaper: String,
    pub mode: String,
    pub primary: Vec<ColorVariable>,
    pub text: Vec<ColorVariable>,
    pub accents: Vec<ColorVariable>,
}

impl RenderContext {
    /// Creates a context with placeholder labels and no colors.
    pub fn new() -> Self {
        Self {
            wallpaper: UNKNOWN_LABEL.to_string(),
            mode: UNKNOWN_LABEL.to_string(),
            primary: Vec::new(),
            text: Vec::new(),
            accents: Vec::new(),
        }
    }

    pub fn with_wallpaper(mut self, wallpaper: impl Into<String>) -> Self {
        self.wallpaper = wallpaper.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_colors(
        mut self,
        primary: Vec<ColorVariable>,
        text: Vec<ColorVariable>,
        accents: Vec<ColorVariable>,
    ) -> Self {
        self.primary = primary;
        self.text = text;
        self.accents = accents;
        self
    }

    /// Number of swatches the page will contain.
    pub fn swatch_count(&self) -> usize {
        self.primary.len() + self.text.len() + self.accents.len()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
