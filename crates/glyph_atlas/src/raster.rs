//! Glyph rasterizer
//!
//! Draws one glyph per cell in row-major order. The pen sits at the cell's
//! top-left corner with the baseline one ascent below it, the same way a
//! text-drawing primitive places a single line of text.

use crate::canvas::Canvas;
use crate::config::{MissingGlyphPolicy, OverflowPolicy, RasterConfig};
use crate::font::{FontError, FontResult, GlyphBitmap, GlyphSource, SizedFont};
use crate::geometry::{Cell, CellGrid};

/// Counters collected while filling the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterStats {
    /// Cells drawn with the font's own glyph
    pub drawn: u32,
    /// Cells drawn with the fallback glyph
    pub fallback: u32,
    /// Cells left blank by the skip policy
    pub skipped: u32,
    /// Cells whose index is not a Unicode scalar value
    pub invalid: u32,
    /// Glyph pixels dropped outside the canvas or, when clipping, outside their cell
    pub clipped_pixels: u64,
}

/// Draw every cell's glyph onto the canvas
pub fn rasterize_grid<S: GlyphSource>(
    canvas: &mut Canvas,
    grid: &CellGrid,
    font: SizedFont<'_, S>,
    config: &RasterConfig,
) -> FontResult<RasterStats> {
    let baseline = font.ascent().round() as i64;
    let mut stats = RasterStats::default();

    log::info!(
        "Rasterizing {} cells ({}x{}) at size {}",
        grid.cell_count(), grid.columns(), grid.rows(), font.size()
    );

    for cell in grid.cells() {
        let resolved = char::from_u32(cell.code_point);
        let glyph = match resolved {
            Some(ch) if font.has_glyph(ch) => {
                stats.drawn += 1;
                font.rasterize(ch)
            }
            _ => {
                if resolved.is_none() {
                    stats.invalid += 1;
                }
                match config.missing_glyph {
                    MissingGlyphPolicy::Fallback => {
                        stats.fallback += 1;
                        font.rasterize_fallback()
                    }
                    MissingGlyphPolicy::Skip => {
                        stats.skipped += 1;
                        continue;
                    }
                    MissingGlyphPolicy::Error => {
                        return Err(FontError::GlyphNotFound(cell.code_point));
                    }
                }
            }
        };

        stats.clipped_pixels += draw_glyph(canvas, &cell, grid.cell_size(), &glyph, baseline, config);
    }

    log::info!(
        "Rasterized {} glyphs, {} fallback, {} skipped, {} invalid code points",
        stats.drawn, stats.fallback, stats.skipped, stats.invalid
    );
    if stats.clipped_pixels > 0 {
        log::debug!("{} glyph pixels clipped", stats.clipped_pixels);
    }

    Ok(stats)
}

/// Draw one glyph with its pen at the cell origin
///
/// Returns the number of covered pixels that were not written.
pub fn draw_glyph(
    canvas: &mut Canvas,
    cell: &Cell,
    (cell_width, cell_height): (u32, u32),
    glyph: &GlyphBitmap,
    baseline: i64,
    config: &RasterConfig,
) -> u64 {
    if glyph.width == 0 || glyph.height == 0 {
        return 0;
    }

    let left = i64::from(cell.origin_x) + i64::from(glyph.xmin);
    let top = i64::from(cell.origin_y) + baseline - (i64::from(glyph.ymin) + glyph.height as i64);

    let cell_left = i64::from(cell.origin_x);
    let cell_top = i64::from(cell.origin_y);
    let cell_right = cell_left + i64::from(cell_width);
    let cell_bottom = cell_top + i64::from(cell_height);

    let mut clipped = 0;
    for (row, line) in glyph.coverage.chunks(glyph.width).take(glyph.height).enumerate() {
        let y = top + row as i64;
        for (col, &coverage) in line.iter().enumerate() {
            if coverage == 0 {
                continue;
            }
            let x = left + col as i64;

            let inside_cell = (cell_left..cell_right).contains(&x) && (cell_top..cell_bottom).contains(&y);
            if config.overflow == OverflowPolicy::Clip && !inside_cell {
                clipped += 1;
                continue;
            }
            if !canvas.blend(x, y, coverage, config.intensity) {
                clipped += 1;
            }
        }
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::test_support::{BoxFont, HugeGlyphFont, FALLBACK_COVERAGE};

    fn stock_grid() -> CellGrid {
        CellGrid::from_config(&GridConfig::default()).unwrap()
    }

    #[test]
    fn test_every_cell_holds_only_its_glyph() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);
        let font = BoxFont::monospace();

        let stats = rasterize_grid(&mut canvas, &grid, font.at_size(14), &RasterConfig::default()).unwrap();

        assert_eq!(stats.drawn, 2048 - 32);
        assert_eq!(stats.fallback, 32);
        assert_eq!(stats.clipped_pixels, 0);

        // Size 14 box glyph: 7x9 pixels
        for cell in grid.cells() {
            assert_eq!(canvas.lit_pixels(cell.origin_x, cell.origin_y, 16, 32), 63, "cell {}", cell.code_point);
        }
        assert_eq!(canvas.lit_pixels(0, 0, 1024, 1024), 2048 * 63);
    }

    #[test]
    fn test_glyph_placement_follows_baseline() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);
        let font = BoxFont::monospace();
        rasterize_grid(&mut canvas, &grid, font.at_size(14), &RasterConfig::default()).unwrap();

        // 'A' = 65 lives at column 1, row 1. Ascent rounds to 17, glyph
        // is 9 tall so its top row is 8 below the cell top; xmin is 1.
        let (x, y) = (16, 32);
        assert_eq!(canvas.get(x + 1, y + 8), Some(255));
        assert_eq!(canvas.get(x + 7, y + 16), Some(255));
        assert_eq!(canvas.get(x, y + 8), Some(0));
        assert_eq!(canvas.get(x + 8, y + 8), Some(0));
        assert_eq!(canvas.get(x + 1, y + 7), Some(0));
        assert_eq!(canvas.get(x + 1, y + 17), Some(0));
    }

    #[test]
    fn test_nul_cell_draws_fallback_glyph() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);
        let font = BoxFont::monospace();
        rasterize_grid(&mut canvas, &grid, font.at_size(14), &RasterConfig::default()).unwrap();

        assert_eq!(canvas.get(1, 8), Some(FALLBACK_COVERAGE));
    }

    #[test]
    fn test_skip_policy_leaves_missing_cells_blank() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);
        let config = RasterConfig { missing_glyph: MissingGlyphPolicy::Skip, ..RasterConfig::default() };

        let stats = rasterize_grid(&mut canvas, &grid, BoxFont::monospace().at_size(14), &config).unwrap();

        assert_eq!(stats.skipped, 32);
        assert_eq!(stats.fallback, 0);
        // Code points 0..32 fill the first half of row 0
        assert_eq!(canvas.lit_pixels(0, 0, 32 * 16, 32), 0);
        assert_eq!(canvas.lit_pixels(32 * 16, 0, 32 * 16, 32), 32 * 63);
    }

    #[test]
    fn test_error_policy_reports_first_missing_code_point() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);
        let config = RasterConfig { missing_glyph: MissingGlyphPolicy::Error, ..RasterConfig::default() };

        let result = rasterize_grid(&mut canvas, &grid, BoxFont::monospace().at_size(14), &config);
        assert!(matches!(result, Err(FontError::GlyphNotFound(0))));
    }

    #[test]
    fn test_intensity_scales_fill() {
        let grid = CellGrid::new(16, 32, 16, 32).unwrap();
        let mut canvas = Canvas::for_grid(&grid);
        let font = BoxFont { first_glyph: 0, ..BoxFont::monospace() };
        let config = RasterConfig { intensity: 40, ..RasterConfig::default() };

        rasterize_grid(&mut canvas, &grid, font.at_size(14), &config).unwrap();
        assert_eq!(canvas.get(1, 8), Some(40));
    }

    #[test]
    fn test_last_cell_oversized_glyph_stays_on_canvas() {
        let grid = stock_grid();
        let mut canvas = Canvas::for_grid(&grid);

        let stats = rasterize_grid(&mut canvas, &grid, HugeGlyphFont.at_size(14), &RasterConfig::default()).unwrap();

        assert_eq!(canvas.dimensions(), (1024, 1024));
        assert!(stats.clipped_pixels > 0);
        assert_eq!(canvas.get(1023, 1023), Some(255));
    }

    #[test]
    fn test_bleed_reaches_neighbors_and_clip_does_not() {
        let grid = CellGrid::new(64, 64, 16, 32).unwrap();
        let last = grid.cell_of(grid.cell_count() - 1).unwrap();

        let mut bleed = Canvas::for_grid(&grid);
        let glyph = HugeGlyphFont.rasterize('\0', 14.0);
        draw_glyph(&mut bleed, &last, grid.cell_size(), &glyph, 0, &RasterConfig::default());
        // Left neighbor of the last cell picks up pixels
        assert!(bleed.lit_pixels(last.origin_x - 16, last.origin_y, 16, 32) > 0);

        let mut clip = Canvas::for_grid(&grid);
        let config = RasterConfig { overflow: OverflowPolicy::Clip, ..RasterConfig::default() };
        let clipped = draw_glyph(&mut clip, &last, grid.cell_size(), &glyph, 0, &config);
        assert_eq!(clip.lit_pixels(0, 0, 64, 64), 16 * 32);
        assert_eq!(clip.lit_pixels(last.origin_x, last.origin_y, 16, 32), 16 * 32);
        assert_eq!(clipped, 40 * 40 - 16 * 32);
    }

    #[test]
    fn test_surrogate_indices_are_invalid() {
        // 1x1 cells cover the whole BMP, including 0xD800..=0xDFFF
        let grid = CellGrid::new(256, 256, 1, 1).unwrap();
        let mut canvas = Canvas::for_grid(&grid);

        let stats = rasterize_grid(&mut canvas, &grid, BoxFont::monospace().at_size(1), &RasterConfig::default()).unwrap();

        assert_eq!(stats.invalid, 2048);
        assert_eq!(stats.fallback, 2048 + 32);
        assert_eq!(stats.drawn, 65536 - 2048 - 32);
    }

    #[test]
    fn test_empty_glyph_draws_nothing() {
        let grid = CellGrid::new(16, 32, 16, 32).unwrap();
        let mut canvas = Canvas::for_grid(&grid);
        let cell = grid.cell(0, 0).unwrap();

        let clipped = draw_glyph(&mut canvas, &cell, grid.cell_size(), &GlyphBitmap::default(), 10, &RasterConfig::default());
        assert_eq!(clipped, 0);
        assert_eq!(canvas.lit_pixels(0, 0, 16, 32), 0);
    }
}
