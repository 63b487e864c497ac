//! SVG generation

use crate::error::RenderError;
use crate::label::{Line, Run};
use crate::layout::{BoundingBox, Point};
use crate::region::is_text_char;

use super::{Font, Paint, Surface, SvgConfig};

/// Surface that accumulates SVG elements
pub struct SvgSurface {
    config: SvgConfig,
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create a new SVG surface of the given pixel size
    pub fn new(width: f64, height: f64, config: SvgConfig) -> Self {
        Self {
            config,
            width,
            height,
            elements: vec![],
        }
    }

    fn class_name(&self, class: &str) -> String {
        format!(
            "{}{}",
            self.config.class_prefix.as_deref().unwrap_or_default(),
            class
        )
    }

    fn indent_str(&self) -> &'static str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Build the final SVG document
    pub fn into_svg(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

impl Surface for SvgSurface {
    fn rect(&mut self, class: &str, name: Option<&str>, bounds: BoundingBox, paint: &Paint) {
        let name_attr = name
            .map(|n| format!(r#" data-region="{}""#, escape_xml(n)))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<rect class="{}"{} x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.class_name(class),
            name_attr,
            num(bounds.x),
            num(bounds.y),
            num(bounds.width),
            num(bounds.height),
            format_paint(paint)
        ));
    }

    fn text(&mut self, class: &str, line: &Line, anchor: Point, font: &Font<'_>) {
        self.elements.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            self.class_name(class),
            num(anchor.x),
            num(anchor.y),
            escape_xml(font.family),
            num(font.size),
            font.color,
            format_runs(&line.runs)
        ));
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(self.into_svg().into_bytes())
    }
}

/// Format a Paint as SVG attributes
fn format_paint(paint: &Paint) -> String {
    let mut parts = vec![format!(r#" fill="{}""#, paint.fill)];
    if paint.fill_opacity < 1.0 {
        parts.push(format!(r#" fill-opacity="{}""#, num(paint.fill_opacity)));
    }
    if let Some(stroke) = paint.stroke {
        parts.push(format!(
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color,
            num(stroke.width)
        ));
        if stroke.opacity < 1.0 {
            parts.push(format!(r#" stroke-opacity="{}""#, num(stroke.opacity)));
        }
    }
    parts.join("")
}

/// Text content of a line; styled runs become tspans
fn format_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| {
            let text = escape_xml(&run.text);
            let mut attrs = String::new();
            if run.bold {
                attrs.push_str(r#" font-weight="bold""#);
            }
            if run.italic {
                attrs.push_str(r#" font-style="italic""#);
            }
            if attrs.is_empty() {
                text
            } else {
                format!("<tspan{}>{}</tspan>", attrs, text)
            }
        })
        .collect()
}

/// Format a coordinate with at most two decimals
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape special XML characters and drop those XML cannot carry
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_text_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Stroke;
    use crate::stylesheet::Color;

    fn plain(text: &str) -> Line {
        Line {
            runs: vec![Run {
                text: text.to_string(),
                bold: false,
                italic: false,
            }],
        }
    }

    #[test]
    fn test_num_trims_zeros() {
        assert_eq!(num(100.0), "100");
        assert_eq!(num(0.3), "0.3");
        assert_eq!(num(93.333333), "93.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("it's \"q\""), "it&apos;s &quot;q&quot;");
    }

    #[test]
    fn test_escape_xml_drops_control_characters() {
        assert_eq!(escape_xml("a\u{1}b\u{b}c"), "abc");
        assert_eq!(escape_xml("tab\there"), "tab\there");
    }

    #[test]
    fn test_format_paint() {
        let paint = Paint {
            fill: Color::rgb(0x1f, 0xb8, 0xcd),
            fill_opacity: 0.3,
            stroke: Some(Stroke {
                color: Color::WHITE,
                width: 2.0,
                opacity: 0.3,
            }),
        };
        assert_eq!(
            format_paint(&paint),
            r##" fill="#1fb8cd" fill-opacity="0.3" stroke="#ffffff" stroke-width="2" stroke-opacity="0.3""##
        );
    }

    #[test]
    fn test_opaque_paint_omits_opacity() {
        let paint = Paint {
            fill: Color::WHITE,
            fill_opacity: 1.0,
            stroke: None,
        };
        assert_eq!(format_paint(&paint), r##" fill="#ffffff""##);
    }

    #[test]
    fn test_styled_runs() {
        let runs = vec![
            Run {
                text: "Summary".to_string(),
                bold: true,
                italic: false,
            },
            Run {
                text: " & Export".to_string(),
                bold: false,
                italic: false,
            },
        ];
        assert_eq!(
            format_runs(&runs),
            r#"<tspan font-weight="bold">Summary</tspan> &amp; Export"#
        );
    }

    #[test]
    fn test_region_rect_markup() {
        let mut surface = SvgSurface::new(100.0, 50.0, SvgConfig::default());
        surface.rect(
            "region",
            Some("Main Viz"),
            BoundingBox::new(10.0, 5.0, 40.0, 20.5),
            &Paint {
                fill: Color::BLACK,
                fill_opacity: 0.3,
                stroke: None,
            },
        );
        let svg = surface.into_svg();
        assert!(svg.contains(
            r##"<rect class="lm-region" data-region="Main Viz" x="10" y="5" width="40" height="20.5" fill="#000000" fill-opacity="0.3"/>"##
        ));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
    }

    #[test]
    fn test_text_markup_without_prefix() {
        let config = SvgConfig::default()
            .without_class_prefix()
            .with_standalone(false)
            .with_pretty_print(false);
        let mut surface = SvgSurface::new(100.0, 50.0, config);
        let font = Font {
            family: "Arial",
            size: 12.0,
            color: Color::BLACK,
        };
        surface.text("label", &plain("Hi"), Point::new(50.0, 25.0), &font);
        let svg = surface.into_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(
            r##"<text class="label" x="50" y="25" text-anchor="middle" font-family="Arial" font-size="12" fill="#000000">Hi</text>"##
        ));
        assert!(!svg.contains('\n'));
    }
}
