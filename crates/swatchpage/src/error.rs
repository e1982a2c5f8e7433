//! Error types for palette extraction and page generation.

use std::io;
use std::path::PathBuf;

use swatchpage_render::RenderError;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// The stylesheet could not be opened.
    #[error("could not open file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part-way through the stylesheet.
    #[error("error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `:root` block was found and nothing was parsed.
    #[error(":root block not found or no color variables parsed")]
    Format,

    /// The page template could not be prepared.
    #[error("could not prepare HTML template: {0}")]
    Template(#[source] RenderError),

    /// The page could not be rendered or written to the output path.
    #[error("could not write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

impl PaletteError {
    /// Create an open error for `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a mid-scan read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_path() {
        let err = PaletteError::open(
            "theme.css",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("theme.css"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            PaletteError::Format.to_string(),
            ":root block not found or no color variables parsed"
        );
    }

    #[test]
    fn test_output_error_names_path() {
        let err = PaletteError::Output {
            path: "out/palette.html".into(),
            source: RenderError::CreateError(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        assert!(err.to_string().contains("out/palette.html"));
    }
}
