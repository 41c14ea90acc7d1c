//! Font size search
//!
//! Grows the font size one step at a time until the reference text no
//! longer fits strictly inside a cell, then settles on the previous size.

use thiserror::Error;

use crate::config::{FitPolicy, SearchConfig};
use crate::font::{GlyphSource, TextExtent};

/// Errors from the font size search
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The reference text still fit after the iteration limit
    #[error("Font size search gave up after {iterations} sizes starting at {start}")]
    Exhausted {
        /// Size the search started from
        start: u32,
        /// Number of sizes measured
        iterations: u32,
    },

    /// No size down to the minimum fits the cell
    #[error("Reference text does not fit a {cell_width}x{cell_height} cell at any size down to {min_size}")]
    NoFittingSize {
        /// Smallest size tried
        min_size: u32,
        /// Cell width in pixels
        cell_width: u32,
        /// Cell height in pixels
        cell_height: u32,
    },
}

/// Outcome of a font size search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSearch {
    /// Chosen font size in pixels
    pub size: u32,
    /// Extent measured by the step that ended the search
    pub measured: TextExtent,
    /// Number of sizes measured
    pub iterations: u32,
    /// Whether `size` itself was measured to fit the cell
    pub verified: bool,
}

/// Find the largest font size whose reference text fits strictly inside a cell
///
/// `cell` is (width, height) in pixels.
pub fn find_font_size<S: GlyphSource>(
    source: &S,
    cell: (u32, u32),
    config: &SearchConfig,
) -> Result<SizeSearch, SearchError> {
    let (cell_width, cell_height) = cell;
    let text = config.reference_text.as_str();
    let mut size = config.start_size;

    for iteration in 1..=config.max_iterations {
        let measured = source.at_size(size).measure(text);
        log::debug!("Size {}: {:?} measures {}x{}", size, text, measured.width, measured.height);

        if measured.fits_within(cell_width, cell_height) {
            size = size
                .checked_add(1)
                .ok_or(SearchError::Exhausted { start: config.start_size, iterations: iteration })?;
            continue;
        }

        if iteration > 1 {
            return Ok(SizeSearch { size: size - 1, measured, iterations: iteration, verified: true });
        }

        return match config.fit_policy {
            FitPolicy::Compatible => {
                if size <= 1 {
                    return Err(SearchError::NoFittingSize { min_size: size, cell_width, cell_height });
                }
                log::warn!(
                    "Start size {} already overflows a {}x{} cell ({}x{}); using {} unverified",
                    size, cell_width, cell_height, measured.width, measured.height, size - 1
                );
                Ok(SizeSearch { size: size - 1, measured, iterations: iteration, verified: false })
            }
            FitPolicy::Strict => shrink_to_fit(source, cell, config, iteration),
        };
    }

    Err(SearchError::Exhausted { start: config.start_size, iterations: config.max_iterations })
}

fn shrink_to_fit<S: GlyphSource>(
    source: &S,
    (cell_width, cell_height): (u32, u32),
    config: &SearchConfig,
    mut iterations: u32,
) -> Result<SizeSearch, SearchError> {
    let text = config.reference_text.as_str();

    for size in (config.min_size..config.start_size).rev() {
        iterations += 1;
        let measured = source.at_size(size).measure(text);
        log::debug!("Shrinking to size {}: {}x{}", size, measured.width, measured.height);

        if measured.fits_within(cell_width, cell_height) {
            return Ok(SizeSearch { size, measured, iterations, verified: true });
        }
    }

    Err(SearchError::NoFittingSize { min_size: config.min_size, cell_width, cell_height })
}
