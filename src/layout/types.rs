//! Core types for the layout engine

use crate::label::Line;
use crate::stylesheet::Color;

/// A 2D point in image (pixel) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in image coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Box of the given size centered on `center`
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if another box lies entirely inside this one
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Positioned label text with its legibility backdrop
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub center: Point,
    pub lines: Vec<Line>,
    /// Baseline y for each entry of `lines`
    pub baselines: Vec<f64>,
    pub font_size: f64,
    pub background: BoundingBox,
}

/// A region mapped into image space
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLayout {
    pub name: String,
    pub bounds: BoundingBox,
    pub fill: Color,
    pub label: Option<LabelLayout>,
}

/// Title line drawn above the plot area
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub text: String,
    /// Anchor point: horizontal center, text baseline
    pub position: Point,
    pub font_size: f64,
}

/// Result of layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// Area the logical canvas is mapped onto
    pub plot: BoundingBox,
    pub title: Option<TitleLayout>,
    /// Regions in drawing order
    pub regions: Vec<RegionLayout>,
}

impl LayoutResult {
    /// Look up a region by name
    pub fn get_region(&self, name: &str) -> Option<&RegionLayout> {
        self.regions.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_centered_box() {
        let b = BoundingBox::centered(Point::new(50.0, 50.0), 20.0, 10.0);
        assert_eq!(b, BoundingBox::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn test_contains_box() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_box(&BoundingBox::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_box(&BoundingBox::new(90.0, 10.0, 20.0, 20.0)));
    }
}
