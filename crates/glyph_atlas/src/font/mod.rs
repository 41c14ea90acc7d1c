//! Font loading and glyph access
//!
//! [`GlyphSource`] is the seam between the atlas pipeline and the font
//! backend. [`FontFace`] implements it with `fontdue`; tests plug in
//! synthetic fonts with predictable metrics.

mod face;

pub use face::FontFace;

use thiserror::Error;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, Error)]
pub enum FontError {
    /// Failed to read the font file
    #[error("Failed to read font file {path}: {source}")]
    Io {
        /// Font file path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse font data
    #[error("Failed to load font: {0}")]
    LoadError(String),

    /// The font has no glyph for a code point and the policy forbids fallbacks
    #[error("No glyph for code point U+{0:04X}")]
    GlyphNotFound(u32),
}

/// Extent of a laid-out run of text, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    /// Pixels from the pen origin to the right of the ink or the final pen
    /// position, whichever is further
    pub width: u32,
    /// Pixels from the top of the line, or of taller ink, down to the lowest ink
    pub height: u32,
}

impl TextExtent {
    /// Whether the extent fits strictly inside a `width` x `height` cell
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width < width && self.height < height
    }
}

/// Coverage bitmap of one rasterized glyph
///
/// `xmin` is the offset from the pen position to the left edge and `ymin`
/// the offset from the baseline to the bottom edge (positive is up).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    /// Bitmap width in pixels
    pub width: usize,
    /// Bitmap height in pixels
    pub height: usize,
    /// Left bearing relative to the pen
    pub xmin: i32,
    /// Bottom edge relative to the baseline
    pub ymin: i32,
    /// Row-major coverage values, `width * height` long
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Whether the glyph has no visible pixels
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c == 0)
    }
}

/// Source of glyph metrics and bitmaps at arbitrary pixel sizes
pub trait GlyphSource {
    /// Bounding box of `text` drawn on one line from a cell origin
    fn measure(&self, text: &str, size: f32) -> TextExtent;

    /// Distance from the top of the line to the baseline
    fn ascent(&self, size: f32) -> f32;

    /// Whether the font maps `ch` to a real glyph
    fn has_glyph(&self, ch: char) -> bool;

    /// Rasterize the glyph for `ch`
    fn rasterize(&self, ch: char, size: f32) -> GlyphBitmap;

    /// Rasterize the font's fallback glyph (`.notdef`)
    fn rasterize_fallback(&self, size: f32) -> GlyphBitmap;

    /// View this source at a fixed integer size
    fn at_size(&self, size: u32) -> SizedFont<'_, Self>
    where
        Self: Sized,
    {
        SizedFont { source: self, size }
    }
}

/// A glyph source bound to one font size
#[derive(Debug)]
pub struct SizedFont<'a, S> {
    source: &'a S,
    size: u32,
}

impl<S> Clone for SizedFont<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SizedFont<'_, S> {}

impl<S: GlyphSource> SizedFont<'_, S> {
    /// Font size in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Extent of `text` at this size
    pub fn measure(&self, text: &str) -> TextExtent {
        self.source.measure(text, self.size as f32)
    }

    /// Baseline offset from the top of a line at this size
    pub fn ascent(&self) -> f32 {
        self.source.ascent(self.size as f32)
    }

    /// Whether the font maps `ch` to a real glyph
    pub fn has_glyph(&self, ch: char) -> bool {
        self.source.has_glyph(ch)
    }

    /// Rasterize `ch` at this size
    pub fn rasterize(&self, ch: char) -> GlyphBitmap {
        self.source.rasterize(ch, self.size as f32)
    }

    /// Rasterize the fallback glyph at this size
    pub fn rasterize_fallback(&self) -> GlyphBitmap {
        self.source.rasterize_fallback(self.size as f32)
    }
}
