//! Grouping colors by name prefix.
//!
//! | Prefix  | Category             |
//! |---------|----------------------|
//! | `--pry` | [`Category::Primary`] |
//! | `--txt` | [`Category::Text`]    |
//! | `--xa`  | [`Category::Accent`]  |
//!
//! Names matching none of the prefixes are left out of the page.

use swatchpage_render::{ColorVariable, RenderContext};

use crate::palette::PaletteMapping;

/// Page section a color is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Primary,
    Text,
    Accent,
}

impl Category {
    /// Prefix rules, checked in order.
    pub const PREFIXES: [(&'static str, Category); 3] = [
        ("--pry", Category::Primary),
        ("--txt", Category::Text),
        ("--xa", Category::Accent),
    ];

    /// Category for a variable name, or `None` if no prefix matches.
    pub fn of(name: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map(|&(_, category)| category)
    }
}

/// Colors split into the three page sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedPalette {
    pub primary: Vec<ColorVariable>,
    pub text: Vec<ColorVariable>,
    pub accents: Vec<ColorVariable>,
}

impl CategorizedPalette {
    pub fn total(&self) -> usize {
        self.primary.len() + self.text.len() + self.accents.len()
    }

    /// Builds the page context with the given header labels.
    pub fn into_context(self, wallpaper: impl Into<String>, mode: impl Into<String>) -> RenderContext {
        RenderContext::new()
            .with_wallpaper(wallpaper)
            .with_mode(mode)
            .with_colors(self.primary, self.text, self.accents)
    }
}

/// Splits `mapping` into sections, keeping the mapping's order within each.
pub fn categorize(mapping: &PaletteMapping) -> CategorizedPalette {
    let mut palette = CategorizedPalette::default();

    for (name, hex) in mapping.iter() {
        let color = ColorVariable::new(name, hex);
        match Category::of(name) {
            Some(Category::Primary) => palette.primary.push(color),
            Some(Category::Text) => palette.text.push(color),
            Some(Category::Accent) => palette.accents.push(color),
            None => {}
        }
    }

    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_prefixes() {
        assert_eq!(Category::of("--pry"), Some(Category::Primary));
        assert_eq!(Category::of("--pry-bg"), Some(Category::Primary));
        assert_eq!(Category::of("--txt-main"), Some(Category::Text));
        assert_eq!(Category::of("--xa-1"), Some(Category::Accent));
        assert_eq!(Category::of("--xaccent"), Some(Category::Accent));
    }

    #[test]
    fn test_category_of_unmatched() {
        assert_eq!(Category::of("--unknown"), None);
        assert_eq!(Category::of("--pr"), None);
        assert_eq!(Category::of("pry-bg"), None);
        assert_eq!(Category::of("--PRY-bg"), None);
    }

    #[test]
    fn test_categorize_splits_and_drops() {
        let mapping: PaletteMapping = [
            ("--pry-bg", "#1a1a1a"),
            ("--txt-main", "#eeeeee"),
            ("--xa-1", "#ff0000"),
            ("--unknown", "#00ff00"),
        ]
        .into_iter()
        .collect();

        let palette = categorize(&mapping);
        assert_eq!(palette.primary, vec![ColorVariable::new("--pry-bg", "#1a1a1a")]);
        assert_eq!(palette.text, vec![ColorVariable::new("--txt-main", "#eeeeee")]);
        assert_eq!(palette.accents, vec![ColorVariable::new("--xa-1", "#ff0000")]);
        assert_eq!(palette.total(), 3);
    }

    #[test]
    fn test_categorize_keeps_mapping_order() {
        let mapping: PaletteMapping = [("--xa-3", "#333"), ("--xa-1", "#111"), ("--xa-2", "#222")]
            .into_iter()
            .collect();

        let names: Vec<_> = categorize(&mapping)
            .accents
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["--xa-3", "--xa-1", "--xa-2"]);
    }

    #[test]
    fn test_categorize_empty() {
        let palette = categorize(&PaletteMapping::new());
        assert_eq!(palette, CategorizedPalette::default());
    }

    #[test]
    fn test_into_context_carries_labels() {
        let mapping: PaletteMapping = [("--pry", "#000")].into_iter().collect();
        let ctx = categorize(&mapping).into_context("/walls/forest.jpg", "dark");

        assert_eq!(ctx.wallpaper, "/walls/forest.jpg");
        assert_eq!(ctx.mode, "dark");
        assert_eq!(ctx.swatch_count(), 1);
    }
}
