//! Error types for page rendering.
//!
//! This module provides [`RenderError`], the error type for every rendering
//! operation. It wraps the underlying template engine's errors so callers
//! never depend on MiniJinja directly.

use std::fmt;

/// Error type for page rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error, unknown filter, or a failed binding.
    TemplateError(String),

    /// Template not registered with the engine.
    TemplateNotFound(String),

    /// Context could not be serialized into template values.
    SerializationError(String),

    /// The output document could not be created.
    CreateError(std::io::Error),

    /// I/O error while writing the rendered document.
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::CreateError(err) => write!(f, "could not create file: {}", err),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::CreateError(err) | RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::TemplateNotFound("palette.html".to_string());
        assert!(err.to_string().contains("template not found"));
        assert!(err.to_string().contains("palette.html"));
    }

    #[test]
    fn test_from_io_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let render_err: RenderError = io_err.into();
        assert!(matches!(render_err, RenderError::IoError(_)));
        assert!(std::error::Error::source(&render_err).is_some());
    }

    #[test]
    fn test_create_error_is_distinct_from_write_error() {
        let create = RenderError::CreateError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(create.to_string().starts_with("could not create file"));
        assert!(std::error::Error::source(&create).is_some());
    }

    #[test]
    fn test_from_minijinja_syntax_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let render_err: RenderError = mj_err.into();
        assert!(matches!(render_err, RenderError::TemplateError(_)));
    }

    #[test]
    fn test_from_minijinja_template_not_found() {
        let mj_err = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "template 'palette.html' not found",
        );
        let render_err: RenderError = mj_err.into();
        assert!(matches!(render_err, RenderError::TemplateNotFound(_)));
    }
}
