//! Drawing a layout onto a surface
//!
//! The render loop only talks to the [`Surface`] trait. [`SvgSurface`]
//! produces SVG markup and [`PngSurface`] rasterizes that markup, so drawing
//! library specifics stay inside `raster`.

pub mod config;
pub mod raster;
pub mod svg;

pub use config::{OutputFormat, StyleConfig, SvgConfig};
pub use raster::PngSurface;
pub use svg::SvgSurface;

use crate::error::RenderError;
use crate::label::{Line, Run};
use crate::layout::{BoundingBox, LayoutResult, Point};
use crate::stylesheet::Color;

/// Outline of a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
}

/// Fill and outline of a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: Color,
    pub fill_opacity: f64,
    /// `None` draws no outline
    pub stroke: Option<Stroke>,
}

/// Typography of a text line
#[derive(Debug, Clone, PartialEq)]
pub struct Font<'a> {
    pub family: &'a str,
    pub size: f64,
    pub color: Color,
}

/// The narrow drawing interface the renderer works against
pub trait Surface {
    /// Draw a rectangle; `name` identifies the region it belongs to, if any
    fn rect(&mut self, class: &str, name: Option<&str>, bounds: BoundingBox, paint: &Paint);

    /// Draw one line of text horizontally centered on `anchor.x` with its
    /// baseline at `anchor.y`
    fn text(&mut self, class: &str, line: &Line, anchor: Point, font: &Font<'_>);

    /// Encode everything drawn so far
    fn finish(self) -> Result<Vec<u8>, RenderError>;
}

/// Draw a computed layout onto `surface`.
///
/// The background goes first, then every region rectangle in order, then
/// every label on top so a later rectangle never hides an earlier label.
pub fn draw<S: Surface>(layout: &LayoutResult, style: &StyleConfig, surface: &mut S) {
    surface.rect(
        "background",
        None,
        BoundingBox::new(0.0, 0.0, layout.width, layout.height),
        &Paint {
            fill: style.background,
            fill_opacity: 1.0,
            stroke: None,
        },
    );

    for region in &layout.regions {
        surface.rect(
            "region",
            Some(&region.name),
            region.bounds,
            &Paint {
                fill: region.fill,
                fill_opacity: style.fill_opacity,
                stroke: outline(style.border, style.border_width, style.border_opacity),
            },
        );
    }

    let font = Font {
        family: &style.font_family,
        size: 0.0,
        color: style.text_color,
    };

    for region in &layout.regions {
        let Some(label) = &region.label else {
            continue;
        };
        surface.rect(
            "label-bg",
            Some(&region.name),
            label.background,
            &Paint {
                fill: style.label_background,
                fill_opacity: style.label_background_opacity,
                stroke: outline(style.border, style.label_border_width, 1.0),
            },
        );
        let font = Font {
            size: label.font_size,
            ..font.clone()
        };
        for (line, baseline) in label.lines.iter().zip(&label.baselines) {
            if line.runs.is_empty() {
                continue;
            }
            surface.text("label", line, Point::new(label.center.x, *baseline), &font);
        }
    }

    if let Some(title) = &layout.title {
        let line = Line {
            runs: vec![Run {
                text: title.text.clone(),
                bold: false,
                italic: false,
            }],
        };
        let font = Font {
            size: title.font_size,
            ..font
        };
        surface.text("title", &line, title.position, &font);
    }
}

fn outline(color: Color, width: f64, opacity: f64) -> Option<Stroke> {
    (width > 0.0).then_some(Stroke {
        color,
        width,
        opacity,
    })
}
