//! Export geometry configuration
//!
//! Page size and raster capture settings, loadable from TOML. Defaults
//! are ISO A4 portrait captured at a forced desktop width with a 2x
//! upscale, matching the interactive preview.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Points per millimetre (72 dpi PDF user space).
const PT_PER_MM: f64 = 72.0 / 25.4;

/// Errors that can occur when loading export configuration.
#[derive(Debug, Error)]
pub enum ExportConfigError {
    #[error("failed to read export config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse export config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Logical page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    /// Page width in PDF points.
    pub fn width_pt(&self) -> f64 {
        self.width_mm * PT_PER_MM
    }

    /// Page height in PDF points.
    pub fn height_pt(&self) -> f64 {
        self.height_mm * PT_PER_MM
    }
}

/// Raster capture settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RasterGeometry {
    /// Logical capture width, independent of the viewer's window.
    pub width_px: u32,
    /// Upscale factor applied for capture quality.
    pub scale: u32,
}

/// Complete export configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ExportConfig {
    pub page: PageGeometry,
    pub raster: RasterGeometry,
}

/// Default geometry: A4 portrait, 1200px logical width, 2x capture.
const DEFAULT_GEOMETRY: &str = r#"
[page]
width_mm = 210.0
height_mm = 297.0

[raster]
width_px = 1200
scale = 2
"#;

impl ExportConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ExportConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ExportConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Raster width in device pixels after upscaling.
    pub fn device_width(&self) -> u32 {
        self.raster.width_px * self.raster.scale
    }

    /// Height of one page band in raster pixels.
    ///
    /// The raster width maps onto the page width, so one page of content
    /// is `height_mm / width_mm` of the raster width.
    pub fn page_height_px(&self) -> u32 {
        let px = self.device_width() as f64 * self.page.height_mm / self.page.width_mm;
        px.round() as u32
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::from_str(DEFAULT_GEOMETRY).expect("default geometry should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = ExportConfig::default();
        assert_eq!(config.page.width_mm, 210.0);
        assert_eq!(config.page.height_mm, 297.0);
        assert_eq!(config.raster.width_px, 1200);
        assert_eq!(config.device_width(), 2400);
    }

    #[test]
    fn test_page_height_px_follows_aspect() {
        let config = ExportConfig::default();
        // 2400 * 297 / 210
        assert_eq!(config.page_height_px(), 3394);
    }

    #[test]
    fn test_points_conversion() {
        let config = ExportConfig::default();
        assert!((config.page.width_pt() - 595.27).abs() < 0.1);
        assert!((config.page.height_pt() - 841.89).abs() < 0.1);
    }

    #[test]
    fn test_parse_custom_toml() {
        let config = ExportConfig::from_str(
            r#"
[page]
width_mm = 216.0
height_mm = 279.0

[raster]
width_px = 800
scale = 1
"#,
        )
        .expect("should parse");
        assert_eq!(config.device_width(), 800);
        assert_eq!(config.page_height_px(), 1033);
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(ExportConfig::from_str("not toml {{").is_err());
    }
}
