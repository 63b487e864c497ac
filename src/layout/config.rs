//! Configuration for the layout engine

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Output image width in pixels
    pub width: f64,

    /// Output image height in pixels
    pub height: f64,

    /// Blank margin around the plot area
    pub margin: f64,

    /// Height of the band reserved above the plot area when a title is set
    pub title_height: f64,

    /// Label font size in pixels
    pub font_size: f64,

    /// Title font size in pixels
    pub title_font_size: f64,

    /// Line advance as a multiple of the font size
    pub line_height: f64,

    /// Average glyph width as a multiple of the font size
    pub char_width: f64,

    /// Padding between label text and its background box
    pub label_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin: 40.0,
            title_height: 50.0,
            font_size: 12.0,
            title_font_size: 18.0,
            line_height: 1.3,
            char_width: 0.6,
            label_padding: 4.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output image size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot area
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!((config.width, config.height), (1200.0, 800.0));
        assert_eq!(config.margin, 40.0);
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.line_height, 1.3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_size(600.0, 400.0)
            .with_margin(10.0)
            .with_font_size(14.0);

        assert_eq!((config.width, config.height), (600.0, 400.0));
        assert_eq!(config.margin, 10.0);
        assert_eq!(config.font_size, 14.0);
    }
}
