//! Validation errors raised before anything is drawn

use thiserror::Error;

use crate::region::{Bounds, Canvas};

/// Input that cannot be rendered
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Nothing to draw
    #[error("no regions to render")]
    NoRegions,

    /// Logical canvas with a non-positive or non-finite extent, or one too
    /// small to scale onto the image
    #[error("invalid canvas {width} x {height}: cannot be mapped onto the image")]
    InvalidCanvas { width: f64, height: f64 },

    /// Pixel size that leaves no room for the plot area
    #[error("invalid image size {width} x {height}: no room left for the plot area")]
    InvalidImageSize { width: f64, height: f64 },

    /// Region without a name
    #[error("region #{index} has an empty name")]
    EmptyName { index: usize },

    /// Name or label holding a character that cannot be drawn
    #[error("region #{index} has a {field} containing the control character {character:?}")]
    ControlCharacter {
        index: usize,
        field: &'static str,
        character: char,
    },

    /// Two regions sharing a name
    #[error("duplicate region name '{name}'")]
    DuplicateName { name: String },

    /// NaN or infinite coordinate
    #[error("region '{name}' has non-finite bounds")]
    NonFiniteBounds { name: String },

    /// Zero or negative width or height
    #[error("region '{name}' has degenerate bounds {}", format_bounds(.bounds))]
    DegenerateBounds { name: String, bounds: Bounds },

    /// Bounds reaching outside the canvas
    #[error(
        "region '{name}' bounds {} lie outside the canvas {}",
        format_bounds(.bounds),
        format_canvas(.canvas)
    )]
    OutOfBounds {
        name: String,
        bounds: Bounds,
        canvas: Canvas,
    },
}

impl ValidationError {
    /// Create an out-of-bounds error
    pub fn out_of_bounds(name: impl Into<String>, bounds: Bounds, canvas: Canvas) -> Self {
        Self::OutOfBounds {
            name: name.into(),
            bounds,
            canvas,
        }
    }

    /// Create a degenerate-bounds error
    pub fn degenerate(name: impl Into<String>, bounds: Bounds) -> Self {
        Self::DegenerateBounds {
            name: name.into(),
            bounds,
        }
    }

    /// Name of the offending region, if the error concerns one
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::DuplicateName { name }
            | Self::NonFiniteBounds { name }
            | Self::DegenerateBounds { name, .. }
            | Self::OutOfBounds { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Bounds as `(left, right, bottom, top)`
fn format_bounds(b: &Bounds) -> String {
    format!("({}, {}, {}, {})", b.left, b.right, b.bottom, b.top)
}

/// Canvas range as `[0, width] x [0, height]`
fn format_canvas(c: &Canvas) -> String {
    format!("[0, {}] x [0, {}]", c.width, c.height)
}
