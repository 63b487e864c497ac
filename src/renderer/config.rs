//! Configuration for drawing and encoding

use std::path::Path;

use clap::ValueEnum;

use crate::stylesheet::Color;

/// Encoded image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    /// Pick the format from a file extension (`.svg` selects SVG, anything else PNG)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Paint and typography applied to every region
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Image background
    pub background: Color,

    /// Opacity of region fills
    pub fill_opacity: f64,

    /// Region border color
    pub border: Color,

    /// Region border width in pixels
    pub border_width: f64,

    /// Opacity of region borders
    pub border_opacity: f64,

    /// Label and title text color
    pub text_color: Color,

    /// Label backdrop color
    pub label_background: Color,

    /// Label backdrop opacity
    pub label_background_opacity: f64,

    /// Label backdrop border width (drawn in the border color)
    pub label_border_width: f64,

    /// CSS font-family list
    pub font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            fill_opacity: 0.3,
            border: Color::WHITE,
            border_width: 2.0,
            border_opacity: 0.3,
            text_color: Color::BLACK,
            label_background: Color::WHITE,
            label_background_opacity: 0.8,
            label_border_width: 1.0,
            font_family: "Arial, Helvetica, sans-serif".to_string(),
        }
    }
}

/// Configuration options for SVG markup
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "lm-" for "lm-region")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("lm-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
