//! Layout Mockup - render named rectangular regions to a static image
//!
//! Regions are defined in a logical coordinate space (for example 12 x 10
//! units, origin bottom-left). Each one is drawn as a semi-transparent
//! rectangle with a thin border and a centered, legible label.
//!
//! # Example
//!
//! ```rust
//! use layout_mockup::{render_with_config, Canvas, Color, OutputFormat, Region, RenderConfig};
//!
//! let regions = vec![
//!     Region::new("Header", (0.0, 12.0, 9.0, 10.0), Color::rgb(0x1f, 0xb8, 0xcd), "Header"),
//!     Region::new("Body", (0.0, 12.0, 0.0, 9.0), Color::rgb(0xdb, 0x45, 0x45), "Body"),
//! ];
//! let config = RenderConfig::new().with_format(OutputFormat::Svg);
//! let svg = render_with_config(&regions, Canvas::new(12.0, 10.0), &config).unwrap();
//! assert!(String::from_utf8(svg).unwrap().contains("<svg"));
//! ```

pub mod document;
pub mod error;
pub mod label;
pub mod layout;
pub mod region;
pub mod renderer;
pub mod stylesheet;

pub use document::{Mockup, DASHBOARD_PRESET};
pub use error::{ConfigError, RenderError};
pub use layout::lint::{LintCategory, LintWarning};
pub use layout::{LayoutConfig, LayoutResult, ValidationError};
pub use region::{Bounds, Canvas, Region};
pub use renderer::{OutputFormat, StyleConfig, Surface};
pub use stylesheet::{Color, Stylesheet};

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use renderer::{PngSurface, SvgConfig, SvgSurface};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Image size, margins and label metrics
    pub layout: LayoutConfig,
    /// Paint and typography
    pub style: StyleConfig,
    /// Encoded output format
    pub format: OutputFormat,
    /// Title drawn above the regions
    pub title: Option<String>,
    /// Compute lint warnings
    pub lint: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the style configuration
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set or clear the title
    pub fn with_title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into);
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Render regions to PNG bytes with default configuration
pub fn render(regions: &[Region], canvas: Canvas) -> Result<Vec<u8>, RenderError> {
    render_with_config(regions, canvas, &RenderConfig::default())
}

/// Render regions to image bytes in the configured format
pub fn render_with_config(
    regions: &[Region],
    canvas: Canvas,
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    let (bytes, _) = render_layout(regions, canvas, config)?;
    Ok(bytes)
}

/// Render regions and return lint warnings alongside the image
///
/// Warnings are only computed when `config.lint` is set.
pub fn render_with_lint(
    regions: &[Region],
    canvas: Canvas,
    config: &RenderConfig,
) -> Result<(Vec<u8>, Vec<LintWarning>), RenderError> {
    render_layout(regions, canvas, config)
}

/// Render regions and write the image to `path`, replacing any existing file
///
/// Nothing is written unless rendering succeeds.
pub fn render_to_file(
    regions: &[Region],
    canvas: Canvas,
    path: &Path,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let bytes = render_with_config(regions, canvas, config)?;
    write_output(path, &bytes)
}

/// Write encoded image bytes to `path`
///
/// The bytes go to a temporary file next to `path` that is renamed over it
/// once complete, so a failed write never leaves a partial image behind.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".layout-mockup-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder.tempfile_in(dir).map_err(|e| RenderError::io(path, e))?;
    file.write_all(bytes).map_err(|e| RenderError::io(path, e))?;
    file.persist(path).map_err(|e| RenderError::io(path, e.error))?;

    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn render_layout(
    regions: &[Region],
    canvas: Canvas,
    config: &RenderConfig,
) -> Result<(Vec<u8>, Vec<LintWarning>), RenderError> {
    let result = layout::compute(regions, canvas, config.title.as_deref(), &config.layout)?;
    debug!("laid out {} regions", result.regions.len());

    let warnings = if config.lint {
        layout::lint::check(regions, &result)
    } else {
        Vec::new()
    };

    let bytes = match config.format {
        OutputFormat::Svg => {
            let mut surface = SvgSurface::new(result.width, result.height, SvgConfig::default());
            renderer::draw(&result, &config.style, &mut surface);
            surface.finish()?
        }
        OutputFormat::Png => {
            let mut surface =
                PngSurface::new(result.width, result.height, config.style.font_family.as_str());
            renderer::draw(&result, &config.style, &mut surface);
            surface.finish()?
        }
    };

    Ok((bytes, warnings))
}
