//! Region and canvas value types
//!
//! Regions live in a logical coordinate space whose origin is the bottom-left
//! corner of the canvas, with `y` growing upward.

use crate::stylesheet::Color;

/// Rectangle extent in logical canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Center as `(x, y)` in logical coordinates
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.left, self.right, self.bottom, self.top]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Strictly positive width and height
    pub fn is_ordered(&self) -> bool {
        self.left < self.right && self.bottom < self.top
    }

    /// Area shared with another rectangle (zero when they only touch)
    pub fn overlap_area(&self, other: &Bounds) -> f64 {
        let w = self.right.min(other.right) - self.left.max(other.left);
        let h = self.top.min(other.top) - self.bottom.max(other.bottom);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}

impl From<(f64, f64, f64, f64)> for Bounds {
    fn from((left, right, bottom, top): (f64, f64, f64, f64)) -> Self {
        Self::new(left, right, bottom, top)
    }
}

/// The logical coordinate space regions are defined in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether `bounds` lies within `[0, width] x [0, height]`
    pub fn contains(&self, bounds: &Bounds) -> bool {
        bounds.left >= 0.0
            && bounds.right <= self.width
            && bounds.bottom >= 0.0
            && bounds.top <= self.height
    }
}

/// Whether `c` may appear in a region name, label or title
///
/// Excludes the C0 controls other than tab, newline and carriage return, and
/// the noncharacters U+FFFE and U+FFFF, none of which XML can carry.
pub fn is_text_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// A named, colored and labeled rectangle on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub bounds: Bounds,
    pub color: Color,
    /// Label markup; `\n` and `<br>` break lines
    pub label: String,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        bounds: impl Into<Bounds>,
        color: Color,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bounds: bounds.into(),
            color,
            label: label.into(),
        }
    }
}
