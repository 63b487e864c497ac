//! Error types for rendering and for loading layout documents

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::ValidationError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Input rejected before drawing
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Output file could not be written
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raster backend failed
    #[error("rasterization failed: {0}")]
    Rasterize(String),
}

impl RenderError {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a rasterization error
    pub fn rasterize(message: impl Into<String>) -> Self {
        Self::Rasterize(message.into())
    }

    /// Whether the input was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the output could not be written
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Errors from reading a layout document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout document: {message}")]
    Syntax { span: Option<Span>, message: String },

    #[error("Unknown color '{value}' (expected #rgb, #rrggbb or a stylesheet token)")]
    UnknownColor { value: String, span: Span },

    #[error("Region '{name}' has no color and the stylesheet defines no brand-N palette")]
    MissingColor { name: String, span: Span },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Syntax {
            span: err.span(),
            message: err.message().to_string(),
        }
    }
}

impl ConfigError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Syntax { span, .. } => span.as_ref(),
            Self::UnknownColor { span, .. } | Self::MissingColor { span, .. } => Some(span),
            Self::Io(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };
        let message = self.to_string();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = RenderError::io(
            "/missing/out.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.is_io());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "cannot write '/missing/out.png': No such file or directory"
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: RenderError = ValidationError::NoRegions.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "validation error: no regions to render");
    }

    #[test]
    fn test_format_with_span_includes_source() {
        let source = "[[region]]\ncolor = \"teal\"\n";
        let err = ConfigError::UnknownColor {
            value: "teal".to_string(),
            span: 19..25,
        };
        let report = err.format(source, "layout.toml");
        assert!(report.contains("layout.toml"));
        assert!(report.contains("teal"));
    }

    #[test]
    fn test_format_without_span_is_plain() {
        let err = ConfigError::Syntax {
            span: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.format("", "layout.toml"), "Invalid layout document: bad");
    }
}
