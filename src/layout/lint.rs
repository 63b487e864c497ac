//! Lint checks for layout defects.
//!
//! Runs after layout to report issues that do not stop rendering:
//! overlapping regions and labels spilling out of their rectangles.

use std::fmt;

use crate::region::Region;

use super::types::LayoutResult;

/// A lint warning about a layout defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Label,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Label => write!(f, "label"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.category, self.message)
    }
}

/// Run all lint checks on a completed layout.
pub fn check(regions: &[Region], result: &LayoutResult) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_overlaps(regions, &mut warnings);
    check_labels(result, &mut warnings);
    warnings
}

// ── Overlap ──────────────────────────────────────────────────────

/// Overlap is legal; it is reported because it is usually unintended in a mockup.
fn check_overlaps(regions: &[Region], warnings: &mut Vec<LintWarning>) {
    for (i, a) in regions.iter().enumerate() {
        for b in &regions[i + 1..] {
            let area = a.bounds.overlap_area(&b.bounds);
            if area > 0.0 {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "\"{}\" and \"{}\" overlap by {} square units",
                        a.name, b.name, area
                    ),
                });
            }
        }
    }
}

// ── Labels ───────────────────────────────────────────────────────

fn check_labels(result: &LayoutResult, warnings: &mut Vec<LintWarning>) {
    for region in &result.regions {
        let Some(label) = &region.label else {
            continue;
        };
        if !region.bounds.contains_box(&label.background) {
            warnings.push(LintWarning {
                category: LintCategory::Label,
                message: format!(
                    "label of \"{}\" ({:.0}x{:.0}px) does not fit inside its region ({:.0}x{:.0}px)",
                    region.name,
                    label.background.width,
                    label.background.height,
                    region.bounds.width,
                    region.bounds.height
                ),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute, LayoutConfig};
    use crate::region::Canvas;
    use crate::stylesheet::Color;

    fn lint(regions: &[Region]) -> Vec<LintWarning> {
        let result =
            compute(regions, Canvas::new(12.0, 10.0), None, &LayoutConfig::default()).unwrap();
        check(regions, &result)
    }

    #[test]
    fn test_adjacent_regions_clean() {
        let regions = vec![
            Region::new("a", (0.0, 6.0, 0.0, 10.0), Color::BLACK, "A"),
            Region::new("b", (6.0, 12.0, 0.0, 10.0), Color::BLACK, "B"),
        ];
        assert!(lint(&regions).is_empty());
    }

    #[test]
    fn test_overlap_reported() {
        let regions = vec![
            Region::new("a", (0.0, 8.0, 0.0, 10.0), Color::BLACK, "A"),
            Region::new("b", (4.0, 12.0, 0.0, 10.0), Color::BLACK, "B"),
        ];
        let warnings = lint(&regions);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::Overlap);
        assert!(warnings[0].message.contains("40 square units"));
    }

    #[test]
    fn test_label_overflow_reported() {
        let regions = vec![Region::new(
            "tiny",
            (0.0, 0.2, 0.0, 0.2),
            Color::BLACK,
            "A label far too long for this box",
        )];
        let warnings = lint(&regions);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::Label);
        assert!(warnings[0].to_string().starts_with("warning[label]:"));
    }
}
