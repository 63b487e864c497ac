//! Layout documents
//!
//! A mockup is described in TOML: an optional title, the logical canvas and an
//! ordered list of regions.
//!
//! ```toml
//! title = "Dashboard"
//!
//! [canvas]
//! width = 12
//! height = 10
//!
//! [[region]]
//! name = "Header"
//! bounds = [0, 12, 9, 10]   # left, right, bottom, top
//! color = "brand-1"         # optional, cycles the palette when omitted
//! label = "Dashboard<br>Header"
//! ```

use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::error::ConfigError;
use crate::layout::{self, ValidationError};
use crate::region::{Bounds, Canvas, Region};
use crate::stylesheet::Stylesheet;

/// Built-in six-region dashboard layout
pub const DASHBOARD_PRESET: &str = r##"title = "Odisha Dashboard Layout Mockup"

[canvas]
width = 12
height = 10

[[region]]
name = "Header"
bounds = [0, 12, 9, 10]
color = "brand-1"
label = "Odisha Dev Dashboard"

[[region]]
name = "Controls"
bounds = [0, 2.5, 0, 9]
color = "brand-2"
label = "Controls<br>• Metrics<br>• Time Range<br>• Districts<br>• Analysis"

[[region]]
name = "Main Viz"
bounds = [2.5, 8, 4, 9]
color = "brand-3"
label = "Primary Viz"

[[region]]
name = "Secondary"
bounds = [8, 12, 4, 9]
color = "brand-4"
label = "Secondary<br>Metrics"

[[region]]
name = "Correlation"
bounds = [2.5, 7, 0, 4]
color = "brand-5"
label = "Correlation<br>Analysis"

[[region]]
name = "Summary"
bounds = [7, 12, 0, 4]
color = "brand-6"
label = "Summary Stats<br>Export Options"
"##;

/// TOML structure for deserializing layout documents
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMockup {
    title: Option<String>,
    canvas: TomlCanvas,
    #[serde(default, rename = "region")]
    regions: Vec<TomlRegion>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCanvas {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRegion {
    name: Spanned<String>,
    /// left, right, bottom, top
    bounds: [f64; 4],
    color: Option<Spanned<String>>,
    /// Defaults to the region name
    label: Option<String>,
}

/// A loaded layout document
#[derive(Debug, Clone, PartialEq)]
pub struct Mockup {
    pub title: Option<String>,
    pub canvas: Canvas,
    pub regions: Vec<Region>,
}

impl Mockup {
    /// Load a layout document from a TOML file
    pub fn from_file(path: &Path, stylesheet: &Stylesheet) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content, stylesheet)
    }

    /// Load a layout document from a TOML string, resolving colors against `stylesheet`
    pub fn from_str(content: &str, stylesheet: &Stylesheet) -> Result<Self, ConfigError> {
        let parsed: TomlMockup = toml::from_str(content)?;

        let regions = parsed
            .regions
            .into_iter()
            .enumerate()
            .map(|(index, region)| -> Result<Region, ConfigError> {
                let color = match &region.color {
                    Some(value) => stylesheet.resolve_color(value.get_ref()).ok_or_else(|| {
                        ConfigError::UnknownColor {
                            value: value.get_ref().clone(),
                            span: value.span(),
                        }
                    })?,
                    None => {
                        stylesheet
                            .palette_color(index)
                            .ok_or_else(|| ConfigError::MissingColor {
                                name: region.name.get_ref().clone(),
                                span: region.name.span(),
                            })?
                    }
                };
                let [left, right, bottom, top] = region.bounds;
                let name = region.name.into_inner();
                let label = region.label.unwrap_or_else(|| name.clone());
                Ok(Region {
                    name,
                    bounds: Bounds::new(left, right, bottom, top),
                    color,
                    label,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Mockup {
            title: parsed.title,
            canvas: Canvas::new(parsed.canvas.width, parsed.canvas.height),
            regions,
        })
    }

    /// The built-in dashboard layout with the default palette
    pub fn dashboard() -> Self {
        Self::from_str(DASHBOARD_PRESET, &Stylesheet::default())
            .expect("Dashboard preset should be a valid layout")
    }

    /// Check the regions against the canvas without rendering
    pub fn validate(&self) -> Result<(), ValidationError> {
        layout::validate(&self.regions, self.canvas)
    }
}
