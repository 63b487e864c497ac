//! Layout computation: logical canvas to image pixels
//!
//! The plot area is the image minus the margin on every side, minus the title
//! band when a title is present. Logical `x` maps linearly onto the plot
//! width; logical `y` is flipped so the canvas bottom lands on the plot bottom.

use log::debug;

use crate::label;
use crate::region::{Bounds, Canvas, Region};

use super::config::LayoutConfig;
use super::error::ValidationError;
use super::types::{BoundingBox, LabelLayout, LayoutResult, Point, RegionLayout, TitleLayout};
use super::validate;

/// Baseline offset from a line's vertical center, as a fraction of font size
const BASELINE_SHIFT: f64 = 0.35;

/// Compute the image-space layout for a validated region list
pub fn compute(
    regions: &[Region],
    canvas: Canvas,
    title: Option<&str>,
    config: &LayoutConfig,
) -> Result<LayoutResult, ValidationError> {
    validate(regions, canvas)?;

    let title = title.map(str::trim).filter(|t| !t.is_empty());
    let plot = plot_area(config, title.is_some())?;
    let scale = pixel_scale(canvas, plot)?;
    debug!(
        "plot area x={:.1} y={:.1} w={:.1} h={:.1} for canvas {}x{}",
        plot.x, plot.y, plot.width, plot.height, canvas.width, canvas.height
    );

    let regions = regions
        .iter()
        .map(|region| {
            let bounds = to_pixels(&region.bounds, canvas, plot, scale);
            debug!(
                "[{}] x={:.1} y={:.1} w={:.1} h={:.1}",
                region.name, bounds.x, bounds.y, bounds.width, bounds.height
            );
            RegionLayout {
                name: region.name.clone(),
                bounds,
                fill: region.color,
                label: layout_label(&region.label, bounds.center(), config),
            }
        })
        .collect();

    let title = title.map(|text| TitleLayout {
        text: text.to_string(),
        position: Point::new(
            config.width / 2.0,
            config.margin + config.title_height / 2.0 + config.title_font_size * BASELINE_SHIFT,
        ),
        font_size: config.title_font_size,
    });

    Ok(LayoutResult {
        width: config.width,
        height: config.height,
        plot,
        title,
        regions,
    })
}

/// Area of the image the logical canvas is mapped onto
fn plot_area(config: &LayoutConfig, with_title: bool) -> Result<BoundingBox, ValidationError> {
    let band = if with_title { config.title_height } else { 0.0 };
    let plot = BoundingBox::new(
        config.margin,
        config.margin + band,
        config.width - 2.0 * config.margin,
        config.height - 2.0 * config.margin - band,
    );

    let usable = [config.width, config.height, plot.width, plot.height]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
    if !usable {
        return Err(ValidationError::InvalidImageSize {
            width: config.width,
            height: config.height,
        });
    }
    Ok(plot)
}

/// Pixels per logical unit along each axis
///
/// A canvas so small that the ratio overflows cannot be mapped.
fn pixel_scale(canvas: Canvas, plot: BoundingBox) -> Result<(f64, f64), ValidationError> {
    let sx = plot.width / canvas.width;
    let sy = plot.height / canvas.height;
    if [sx, sy].iter().all(|s| s.is_finite() && *s > 0.0) {
        Ok((sx, sy))
    } else {
        Err(ValidationError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

/// Map logical bounds onto the plot area
fn to_pixels(
    bounds: &Bounds,
    canvas: Canvas,
    plot: BoundingBox,
    (sx, sy): (f64, f64),
) -> BoundingBox {
    BoundingBox::new(
        plot.x + bounds.left * sx,
        plot.y + (canvas.height - bounds.top) * sy,
        bounds.width() * sx,
        bounds.height() * sy,
    )
}

/// Position label lines around `center` and size the backdrop from an
/// average glyph width estimate
fn layout_label(markup: &str, center: Point, config: &LayoutConfig) -> Option<LabelLayout> {
    let parsed = label::parse(markup);
    if parsed.is_empty() {
        return None;
    }

    let advance = config.font_size * config.line_height;
    let text_width = parsed.max_line_chars() as f64 * config.font_size * config.char_width;
    let text_height = parsed.lines.len() as f64 * advance;

    let top = center.y - text_height / 2.0;
    let baselines = (0..parsed.lines.len())
        .map(|i| top + advance * (i as f64 + 0.5) + config.font_size * BASELINE_SHIFT)
        .collect();

    let background = BoundingBox::centered(
        center,
        text_width + 2.0 * config.label_padding,
        text_height + 2.0 * config.label_padding,
    );

    Some(LabelLayout {
        center,
        lines: parsed.lines,
        baselines,
        font_size: config.font_size,
        background,
    })
}
