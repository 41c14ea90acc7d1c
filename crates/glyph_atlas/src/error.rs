//! Top-level error type for atlas generation

use thiserror::Error;

use crate::config::ConfigError;
use crate::font::FontError;
use crate::geometry::GeometryError;
use crate::search::SearchError;
use crate::writer::WriteError;

/// Result type for atlas generation
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Any failure while generating or writing an atlas
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Cells do not tile the canvas
    #[error("Grid error: {0}")]
    Geometry(#[from] GeometryError),

    /// Font loading or glyph lookup failed
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// No usable font size was found
    #[error("Size search error: {0}")]
    Search(#[from] SearchError),

    /// The atlas image could not be written
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}
