//! Hex color decoding and label contrast.
//!
//! Swatch labels sit directly on the swatch color, so each label needs a
//! tone that stays readable. The tone is picked from the ITU-R BT.601 luma
//! of the background:
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//!
//! `Y >= 128` gets a dark label, anything below gets a light one. The page
//! script applies the same rule in the browser.
//!
//! # Example
//!
//! ```rust
//! use swatchpage_render::color::{hex_to_rgb, LabelTone};
//!
//! assert_eq!(hex_to_rgb("#fff"), Some((255, 255, 255)));
//! assert_eq!(LabelTone::for_hex("#1a1a1a"), LabelTone::Light);
//! ```

/// Luma at or above which a background counts as light.
pub const LUMA_THRESHOLD: f64 = 128.0;

/// Decodes `#RGB` or `#RRGGBB` into channel values.
///
/// Returns `None` for anything else, including hex-shaped strings that
/// carry non-hex digits such as `#zzz`.
pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// BT.601 luma of an sRGB triple, in `0.0..=255.0`.
pub fn luma((r, g, b): (u8, u8, u8)) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Label tone drawn over a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    /// Near-black label, for light backgrounds.
    Dark,
    /// Near-white label, for dark backgrounds.
    Light,
}

impl LabelTone {
    /// Picks the tone for a background hex value.
    ///
    /// Undecodable values fall back to [`LabelTone::Dark`], which matches the
    /// page's default label color.
    pub fn for_hex(value: &str) -> Self {
        match hex_to_rgb(value) {
            Some(rgb) if luma(rgb) < LUMA_THRESHOLD => LabelTone::Light,
            _ => LabelTone::Dark,
        }
    }

    /// Name used in the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelTone::Dark => "dark",
            LabelTone::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_six_digits() {
        assert_eq!(hex_to_rgb("#ff6b35"), Some((255, 107, 53)));
        assert_eq!(hex_to_rgb("#FF6B35"), Some((255, 107, 53)));
    }

    #[test]
    fn test_hex_to_rgb_three_digits_expands() {
        assert_eq!(hex_to_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("#0a0"), Some((0, 170, 0)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_bad_input() {
        assert_eq!(hex_to_rgb("fff"), None);
        assert_eq!(hex_to_rgb("#ffff"), None);
        assert_eq!(hex_to_rgb("#zzz"), None);
        assert_eq!(hex_to_rgb("#12345g"), None);
        assert_eq!(hex_to_rgb("#"), None);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma((0, 0, 0)), 0.0);
        assert!((luma((255, 255, 255)) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_green_is_brighter_than_blue() {
        assert!(luma((0, 255, 0)) > luma((0, 0, 255)));
    }

    #[test]
    fn test_label_tone_threshold() {
        // 0.299*128 + 0.587*128 + 0.114*128 = 128
        assert_eq!(LabelTone::for_hex("#808080"), LabelTone::Dark);
        assert_eq!(LabelTone::for_hex("#7f7f7f"), LabelTone::Light);
    }

    #[test]
    fn test_label_tone_for_common_colors() {
        assert_eq!(LabelTone::for_hex("#1a1a1a"), LabelTone::Light);
        assert_eq!(LabelTone::for_hex("#eeeeee"), LabelTone::Dark);
        assert_eq!(LabelTone::for_hex("#ff0000"), LabelTone::Light);
        assert_eq!(LabelTone::for_hex("#ff0"), LabelTone::Dark);
    }

    #[test]
    fn test_label_tone_falls_back_to_dark() {
        assert_eq!(LabelTone::for_hex("#zzz"), LabelTone::Dark);
        assert_eq!(LabelTone::Dark.as_str(), "dark");
        assert_eq!(LabelTone::Light.as_str(), "light");
    }
}
