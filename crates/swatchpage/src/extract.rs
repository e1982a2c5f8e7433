//! Stylesheet scanning.
//!
//! Only the first `:root { ... }` block is read, one declaration per line:
//!
//! ```css
//! :root {
//!   --pry-bg: #1a1a1a;
//!   --txt-main: #eee;
//! }
//! ```
//!
//! The opening line must contain `:root {` verbatim and is not itself
//! scanned for declarations. The first line inside the block that contains
//! `}` ends the scan; nothing after it is read.
//!
//! Inside the block, a line matching `--name: value;` whose value is not
//! hex-shaped (`#` plus a total length of 4 or 7) is skipped with a warning.
//! Lines that do not look like a declaration at all are skipped silently.
//!
//! Before the block, header comments of the form `/* Wallpaper: <label> */`
//! and `/* Mode: <label> */` are recorded as page metadata. The first
//! non-empty label of each kind wins.
//!
//! Lines are decoded lossily, so bytes that are not UTF-8 (a Latin-1
//! copyright sign in a comment, say) never fail the scan.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PaletteError;
use crate::palette::PaletteMapping;

/// Marker that opens the scanned block.
pub const ROOT_MARKER: &str = ":root {";

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([a-zA-Z0-9_-]+)\s*:\s*([^;]+);").expect("declaration pattern is valid")
});

static HEADER_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/\*\s*(Wallpaper|Mode)\s*:\s*(.*?)\s*\*/$").expect("header comment pattern is valid")
});

/// A declaration dropped because its value is not a hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    /// Variable name, including the leading `--`.
    pub name: String,
    /// Trimmed value as written.
    pub value: String,
}

impl fmt::Display for SkippedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping invalid color value '{}' for variable '{}'",
            self.value, self.name
        )
    }
}

/// Result of scanning a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub palette: PaletteMapping,
    pub skipped: Vec<SkippedDeclaration>,
    /// Whether a `:root {` line was seen.
    pub root_found: bool,
    /// Label from a `/* Wallpaper: ... */` header comment.
    pub wallpaper: Option<String>,
    /// Label from a `/* Mode: ... */` header comment.
    pub mode: Option<String>,
}

impl Extraction {
    /// Accepts the scan unless no block was found and nothing was parsed.
    ///
    /// A block that was found but held no valid colors is accepted and
    /// yields an empty mapping.
    pub fn into_mapping(self) -> Result<PaletteMapping, PaletteError> {
        if !self.root_found && self.palette.is_empty() {
            return Err(PaletteError::Format);
        }
        Ok(self.palette)
    }

    fn record_header(&mut self, line: &str) {
        let Some(caps) = HEADER_COMMENT.captures(line) else {
            return;
        };
        let label = &caps[2];
        let slot = match &caps[1] {
            "Wallpaper" => &mut self.wallpaper,
            _ => &mut self.mode,
        };
        if slot.is_none() && !label.is_empty() {
            *slot = Some(label.to_string());
        }
    }
}

/// Whether `value` has the shape of a `#RGB` or `#RRGGBB` literal.
///
/// Only the prefix and length are checked; the digits are not.
pub fn is_hex_shaped(value: &str) -> bool {
    value.starts_with('#') && matches!(value.len(), 4 | 7)
}

/// Matches one trimmed line against the declaration pattern, returning
/// `(name, value)` with the `--` restored and the value trimmed.
fn parse_declaration(line: &str) -> Option<(String, String)> {
    let caps = DECLARATION.captures(line)?;
    let name = format!("--{}", &caps[1]);
    let value = caps[2].trim().to_string();
    Some((name, value))
}

/// Scans stylesheet text from `reader`.
///
/// Each skipped declaration is logged as a warning when it is met.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails. Invalid UTF-8 is
/// not an error.
pub fn extract_reader<R: BufRead>(mut reader: R) -> io::Result<Extraction> {
    let mut extraction = Extraction::default();
    let mut in_root = false;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();

        if !in_root {
            if line.contains(ROOT_MARKER) {
                in_root = true;
                extraction.root_found = true;
            } else {
                extraction.record_header(line);
            }
            continue;
        }

        if line.contains('}') {
            break;
        }

        let Some((name, value)) = parse_declaration(line) else {
            continue;
        };

        if is_hex_shaped(&value) {
            extraction.palette.insert(name, value);
        } else {
            let skipped = SkippedDeclaration { name, value };
            tracing::warn!(
                variable = %skipped.name,
                value = %skipped.value,
                "{}",
                skipped
            );
            extraction.skipped.push(skipped);
        }
    }

    Ok(extraction)
}

/// Scans the stylesheet at `path`, keeping the header metadata alongside
/// the palette.
///
/// # Errors
///
/// - [`PaletteError::Io`] if the file cannot be opened
/// - [`PaletteError::Read`] if reading fails part-way
pub fn extract_file(path: &Path) -> Result<Extraction, PaletteError> {
    let file = File::open(path).map_err(|e| PaletteError::open(path, e))?;
    let extraction =
        extract_reader(BufReader::new(file)).map_err(|e| PaletteError::read(path, e))?;

    tracing::debug!(
        path = %path.display(),
        root_found = extraction.root_found,
        colors = extraction.palette.len(),
        skipped = extraction.skipped.len(),
        "scanned stylesheet"
    );
    Ok(extraction)
}

/// Reads the color variables declared in the first `:root` block of the
/// stylesheet at `path`.
///
/// # Errors
///
/// - [`PaletteError::Io`] if the file cannot be opened
/// - [`PaletteError::Read`] if reading fails part-way
/// - [`PaletteError::Format`] if no `:root` block was found and nothing
///   was parsed
pub fn extract(path: &Path) -> Result<PaletteMapping, PaletteError> {
    extract_file(path)?.into_mapping()
}
