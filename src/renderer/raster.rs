//! PNG output through resvg
//!
//! Drawing is delegated to an [`SvgSurface`]; `finish` parses the markup with
//! usvg and rasterizes it with tiny-skia at the surface's pixel size.

use log::debug;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::error::RenderError;
use crate::label::Line;
use crate::layout::{BoundingBox, Point};

use super::{Font, Paint, Surface, SvgConfig, SvgSurface};

/// Surface that encodes to PNG
pub struct PngSurface {
    svg: SvgSurface,
    font_family: String,
}

impl PngSurface {
    /// Create a PNG surface of the given pixel size
    pub fn new(width: f64, height: f64, font_family: impl Into<String>) -> Self {
        // Rasterized markup never leaves the process, so skip cosmetics
        let config = SvgConfig::default()
            .with_standalone(false)
            .with_pretty_print(false);
        Self {
            svg: SvgSurface::new(width, height, config),
            font_family: font_family.into(),
        }
    }
}

impl Surface for PngSurface {
    fn rect(&mut self, class: &str, name: Option<&str>, bounds: BoundingBox, paint: &Paint) {
        self.svg.rect(class, name, bounds, paint);
    }

    fn text(&mut self, class: &str, line: &Line, anchor: Point, font: &Font<'_>) {
        self.svg.text(class, line, anchor, font);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        rasterize(&self.svg.into_svg(), &self.font_family)
    }
}

/// Rasterize an SVG document to PNG bytes
pub fn rasterize(svg: &str, font_family: &str) -> Result<Vec<u8>, RenderError> {
    let mut opt = usvg::Options::default();
    opt.font_family = primary_font(font_family);
    opt.fontdb_mut().load_system_fonts();
    debug!("loaded {} font faces", opt.fontdb.len());

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::rasterize(e.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::rasterize(format!(
            "cannot allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    let png = pixmap
        .encode_png()
        .map_err(|e| RenderError::rasterize(e.to_string()))?;
    debug!(
        "encoded {}x{} PNG ({} bytes)",
        size.width(),
        size.height(),
        png.len()
    );
    Ok(png)
}

/// First family of a CSS font-family list
fn primary_font(fonts: &str) -> String {
    fonts
        .split(',')
        .map(|s| s.trim().trim_matches('"'))
        .find(|s| !s.is_empty())
        .unwrap_or("Arial")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_primary_font() {
        assert_eq!(primary_font("Arial, Helvetica, sans-serif"), "Arial");
        assert_eq!(primary_font(r#""DejaVu Sans", sans-serif"#), "DejaVu Sans");
        assert_eq!(primary_font(""), "Arial");
    }

    #[test]
    fn test_rasterize_produces_png() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10"><rect x="0" y="0" width="20" height="10" fill="#ff0000"/></svg>"##;
        let png = rasterize(svg, "Arial").unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_rasterize_rejects_malformed_markup() {
        let err = rasterize("<svg", "Arial").unwrap_err();
        assert!(matches!(err, RenderError::Rasterize(_)));
    }
}
