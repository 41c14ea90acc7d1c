//! # Atlas Configuration
//!
//! Layout, size search and rasterization settings for one atlas.
//!
//! The defaults describe the stock atlas: a 1024x1024 canvas split into
//! 16x32 cells (64 columns by 32 rows), font size search starting at 10
//! with `"M"` as the reference glyph, glyphs drawn at full intensity and
//! written to `assets/images/font.png`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{Config, ConfigError};

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "assets/images/font.png";

/// # Atlas Configuration
///
/// Top-level configuration consumed by [`crate::AtlasGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Where the finished atlas is written
    pub output_path: PathBuf,
    /// Canvas and cell dimensions
    pub grid: GridConfig,
    /// Font size search parameters
    pub search: SearchConfig,
    /// Glyph drawing parameters
    pub raster: RasterConfig,
}

impl AtlasConfig {
    /// Set the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set canvas dimensions in pixels
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.grid.canvas_width = width;
        self.grid.canvas_height = height;
        self
    }

    /// Set cell dimensions in pixels
    pub fn with_cell_size(mut self, width: u32, height: u32) -> Self {
        self.grid.cell_width = width;
        self.grid.cell_height = height;
        self
    }

    /// Set the font size the search starts from
    pub fn with_start_size(mut self, size: u32) -> Self {
        self.search.start_size = size;
        self
    }

    /// Set the fit policy used when the start size is already too large
    pub fn with_fit_policy(mut self, policy: FitPolicy) -> Self {
        self.search.fit_policy = policy;
        self
    }

    /// Set how cells without a glyph in the font are drawn
    pub fn with_missing_glyph_policy(mut self, policy: MissingGlyphPolicy) -> Self {
        self.raster.missing_glyph = policy;
        self
    }

    /// Set whether glyphs may draw past their cell
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.raster.overflow = policy;
        self
    }

    /// Validate the configuration
    ///
    /// Grid divisibility is checked separately by [`crate::geometry::CellGrid::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path cannot be empty".to_string()));
        }
        self.search.validate()
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            grid: GridConfig::default(),
            search: SearchConfig::default(),
            raster: RasterConfig::default(),
        }
    }
}

impl Config for AtlasConfig {}

/// Canvas and cell dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 1024,
            cell_width: 16,
            cell_height: 32,
        }
    }
}

/// What the search does when the start size itself does not fit a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Step back one size and stop without re-measuring.
    ///
    /// The returned size is not guaranteed to fit when the very first
    /// measurement already overflowed the cell.
    #[default]
    Compatible,
    /// Keep shrinking until the reference text fits, down to `min_size`.
    Strict,
}

/// Font size search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// First size measured
    pub start_size: u32,
    /// Text whose extent must fit strictly inside one cell
    pub reference_text: String,
    /// Upper bound on measurements before the search gives up
    pub max_iterations: u32,
    /// Smallest size the strict policy will try
    pub min_size: u32,
    /// Behavior when `start_size` does not fit
    pub fit_policy: FitPolicy,
}

impl SearchConfig {
    /// Validate the search parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_size == 0 {
            return Err(ConfigError::Invalid("start size must be at least 1".to_string()));
        }
        if self.reference_text.is_empty() {
            return Err(ConfigError::Invalid("reference text cannot be empty".to_string()));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid("max iterations must be at least 1".to_string()));
        }
        if self.min_size == 0 || self.min_size > self.start_size {
            return Err(ConfigError::Invalid(format!(
                "min size must be between 1 and the start size ({}), got {}",
                self.start_size, self.min_size
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_size: 10,
            reference_text: "M".to_string(),
            max_iterations: 1024,
            min_size: 1,
            fit_policy: FitPolicy::default(),
        }
    }
}

/// How cells whose code point has no glyph in the font are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingGlyphPolicy {
    /// Draw the font's fallback glyph (`.notdef`)
    #[default]
    Fallback,
    /// Leave the cell blank
    Skip,
    /// Abort generation
    Error,
}

/// Whether glyph pixels may land outside their own cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Oversized glyphs bleed into neighboring cells
    #[default]
    Bleed,
    /// Glyph pixels are clipped to the cell
    Clip,
}

/// Glyph drawing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Fill intensity for glyph coverage
    pub intensity: u8,
    /// Policy for code points the font has no glyph for
    pub missing_glyph: MissingGlyphPolicy,
    /// Policy for glyphs larger than their cell
    pub overflow: OverflowPolicy,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            intensity: 255,
            missing_glyph: MissingGlyphPolicy::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_atlas() {
        let config = AtlasConfig::default();
        assert_eq!(config.output_path, PathBuf::from("assets/images/font.png"));
        assert_eq!(config.grid, GridConfig { canvas_width: 1024, canvas_height: 1024, cell_width: 16, cell_height: 32 });
        assert_eq!(config.search.start_size, 10);
        assert_eq!(config.search.reference_text, "M");
        assert_eq!(config.search.fit_policy, FitPolicy::Compatible);
        assert_eq!(config.raster.intensity, 255);
        assert_eq!(config.raster.missing_glyph, MissingGlyphPolicy::Fallback);
        assert_eq!(config.raster.overflow, OverflowPolicy::Bleed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_search() {
        let mut config = AtlasConfig::default();
        config.search.reference_text.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AtlasConfig::default().with_start_size(0);
        assert!(config.validate().is_err());

        let mut config = AtlasConfig::default();
        config.search.min_size = 11;
        assert!(config.validate().is_err());

        let mut config = AtlasConfig::default();
        config.search.max_iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = AtlasConfig::default().with_output_path("");
        assert!(config.validate().is_err());
    }
}
