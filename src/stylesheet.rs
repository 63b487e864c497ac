//! Stylesheet system for fill palettes
//!
//! Regions name their fill either with a hex literal or with a symbolic token
//! (`brand-1`, `brand-2`, ...). A stylesheet maps tokens to concrete colors so
//! the same layout can be rendered with different palettes.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid color '{value}' for token '{token}'")]
    InvalidColor { token: String, value: String },
}

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
                let mut next = || digits.next().map(|d| (d * 17) as u8);
                Some(Self::rgb(next()?, next()?, next()?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A stylesheet mapping symbolic color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color
    pub colors: BTreeMap<String, Color>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Prefix of the tokens that make up the cycling fill palette
const PALETTE_PREFIX: &str = "brand-";

/// Default palette - the six dashboard brand colors
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "brand"
description = "Dashboard brand colors"

[colors]
brand-1 = "#1FB8CD"
brand-2 = "#DB4545"
brand-3 = "#2E8B57"
brand-4 = "#5D878F"
brand-5 = "#D2BA4C"
brand-6 = "#B4413C"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        let mut colors = BTreeMap::new();
        for (token, value) in parsed.colors {
            let color = Color::from_hex(&value).ok_or_else(|| StylesheetError::InvalidColor {
                token: token.clone(),
                value: value.clone(),
            })?;
            colors.insert(token, color);
        }

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors,
        })
    }

    /// Resolve a symbolic color token
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<Color> {
        self.colors.get(token).copied()
    }

    /// Resolve a color written as a hex literal or a palette token
    pub fn resolve_color(&self, value: &str) -> Option<Color> {
        if value.starts_with('#') {
            Color::from_hex(value)
        } else {
            self.resolve(value)
        }
    }

    /// Number of `brand-N` tokens forming the cycling palette
    pub fn palette_len(&self) -> usize {
        (1..)
            .take_while(|n| self.colors.contains_key(&format!("{PALETTE_PREFIX}{n}")))
            .count()
    }

    /// Palette color for the region at `index`, wrapping around the palette
    pub fn palette_color(&self, index: usize) -> Option<Color> {
        let len = self.palette_len();
        if len == 0 {
            return None;
        }
        self.resolve(&format!("{PALETTE_PREFIX}{}", index % len + 1))
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
