//! Layout engine for mapping regions into image space
//!
//! This module validates a region list against its canvas and computes the
//! pixel geometry of every rectangle, label and the optional title.

pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use error::ValidationError;
pub use types::*;

use std::collections::HashSet;

use crate::region::{is_text_char, Canvas, Region};

/// Validate a region list against its canvas.
///
/// Checks run in order and the first failure is returned: canvas extent,
/// non-empty region list, then per region (in order) name, characters,
/// uniqueness, finiteness, ordering and containment.
pub fn validate(regions: &[Region], canvas: Canvas) -> Result<(), ValidationError> {
    if !canvas.is_valid() {
        return Err(ValidationError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }
    if regions.is_empty() {
        return Err(ValidationError::NoRegions);
    }

    let mut seen = HashSet::new();
    for (index, region) in regions.iter().enumerate() {
        if region.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { index });
        }
        for (field, text) in [("name", &region.name), ("label", &region.label)] {
            if let Some(character) = text.chars().find(|c| !is_text_char(*c)) {
                return Err(ValidationError::ControlCharacter {
                    index,
                    field,
                    character,
                });
            }
        }
        if !seen.insert(region.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: region.name.clone(),
            });
        }
        if !region.bounds.is_finite() {
            return Err(ValidationError::NonFiniteBounds {
                name: region.name.clone(),
            });
        }
        if !region.bounds.is_ordered() {
            return Err(ValidationError::degenerate(&region.name, region.bounds));
        }
        if !canvas.contains(&region.bounds) {
            return Err(ValidationError::out_of_bounds(
                &region.name,
                region.bounds,
                canvas,
            ));
        }
    }
    Ok(())
}
