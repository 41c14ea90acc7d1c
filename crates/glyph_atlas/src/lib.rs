//! # Glyph Atlas
//!
//! Generates fixed-grid bitmap font atlases for renderers that draw text by
//! texture-mapping glyph cells.
//!
//! ## Pipeline
//!
//! - **Canvas**: a single-channel image buffer, zero-initialized
//! - **Cell Grid**: fixed-size cells that tile the canvas exactly
//! - **Size Search**: the largest font size whose reference glyph fits a cell
//! - **Rasterizer**: one glyph per cell, code point = row-major cell index
//! - **Writer**: lossless grayscale PNG output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glyph_atlas::prelude::*;
//!
//! fn main() -> Result<(), AtlasError> {
//!     let config = AtlasConfig::default();
//!     let generator = AtlasGenerator::new(config)?;
//!     let atlas = generator.generate_from_file("fonts/mono.ttf")?;
//!     generator.write(&atlas)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod font;

pub mod canvas;
pub mod geometry;
pub mod raster;
pub mod search;
pub mod writer;

mod error;
mod generator;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AtlasError, AtlasResult};
pub use generator::{AtlasGenerator, GeneratedAtlas};

/// Common imports for atlas users
pub mod prelude {
    pub use crate::{
        AtlasError, AtlasResult,
        AtlasGenerator, GeneratedAtlas,
        canvas::Canvas,
        config::{
            AtlasConfig, Config, ConfigError, FitPolicy, GridConfig,
            MissingGlyphPolicy, OverflowPolicy, RasterConfig, SearchConfig,
        },
        font::{FontFace, GlyphBitmap, GlyphSource, TextExtent},
        geometry::{Cell, CellGrid, UvRect},
        raster::RasterStats,
        search::SizeSearch,
    };
}
