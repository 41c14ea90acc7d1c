//! Atlas generation pipeline
//!
//! Allocates the canvas, derives the grid, searches the font size, fills
//! every cell and hands the result to the writer. Single-threaded; the
//! canvas is owned by the pipeline and passed down by `&mut`.

use std::path::Path;

use crate::canvas::Canvas;
use crate::config::AtlasConfig;
use crate::error::AtlasResult;
use crate::font::{FontFace, GlyphSource};
use crate::geometry::CellGrid;
use crate::raster::{rasterize_grid, RasterStats};
use crate::search::{find_font_size, SizeSearch};
use crate::writer::{encode_png, write_atlas};

/// A finished atlas, ready to be written
#[derive(Debug, Clone)]
pub struct GeneratedAtlas {
    /// Filled canvas
    pub canvas: Canvas,
    /// Grid the canvas was filled with
    pub grid: CellGrid,
    /// Font size search outcome
    pub search: SizeSearch,
    /// Rasterizer counters
    pub stats: RasterStats,
}

impl GeneratedAtlas {
    /// Chosen font size in pixels
    pub const fn font_size(&self) -> u32 {
        self.search.size
    }

    /// Encode the canvas as PNG bytes
    pub fn to_png(&self) -> AtlasResult<Vec<u8>> {
        Ok(encode_png(&self.canvas)?)
    }
}

/// Builds atlases from a validated configuration
#[derive(Debug, Clone)]
pub struct AtlasGenerator {
    config: AtlasConfig,
    grid: CellGrid,
}

impl AtlasGenerator {
    /// Validate the configuration and derive the cell grid
    pub fn new(config: AtlasConfig) -> AtlasResult<Self> {
        config.validate()?;
        let grid = CellGrid::from_config(&config.grid)?;

        log::debug!(
            "Atlas grid: {}x{} canvas, {}x{} cells, {} columns x {} rows",
            config.grid.canvas_width, config.grid.canvas_height,
            config.grid.cell_width, config.grid.cell_height,
            grid.columns(), grid.rows()
        );

        Ok(Self { config, grid })
    }

    /// Active configuration
    pub const fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Cell grid derived from the configuration
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Generate an atlas from any glyph source
    pub fn generate<S: GlyphSource>(&self, source: &S) -> AtlasResult<GeneratedAtlas> {
        let mut canvas = Canvas::for_grid(&self.grid);

        let search = find_font_size(source, self.grid.cell_size(), &self.config.search)?;
        log::info!(
            "Chose font size {} after {} measurements (last {}x{})",
            search.size, search.iterations, search.measured.width, search.measured.height
        );

        let stats = rasterize_grid(&mut canvas, &self.grid, source.at_size(search.size), &self.config.raster)?;

        Ok(GeneratedAtlas { canvas, grid: self.grid, search, stats })
    }

    /// Load a font file and generate its atlas
    pub fn generate_from_file<P: AsRef<Path>>(&self, font_path: P) -> AtlasResult<GeneratedAtlas> {
        let face = FontFace::from_file(font_path)?;
        self.generate(&face)
    }

    /// Write an atlas to the configured output path
    pub fn write(&self, atlas: &GeneratedAtlas) -> AtlasResult<()> {
        write_atlas(&atlas.canvas, &self.config.output_path)?;
        Ok(())
    }

    /// Load, generate and write in one step
    pub fn run<P: AsRef<Path>>(&self, font_path: P) -> AtlasResult<GeneratedAtlas> {
        let atlas = self.generate_from_file(font_path)?;
        self.write(&atlas)?;
        Ok(atlas)
    }
}
