//! Synthetic fonts with predictable metrics for unit tests

use crate::font::{GlyphBitmap, GlyphSource, TextExtent};

/// Coverage the fallback glyph is drawn with, distinct from real glyphs
pub const FALLBACK_COVERAGE: u8 = 100;

/// Font whose glyphs are solid boxes scaled linearly with size
///
/// Every character advances by `size * advance_scale + advance_offset`
/// and lines are `size * line_scale` tall. Code points below
/// `first_glyph` have no glyph.
#[derive(Debug, Clone)]
pub struct BoxFont {
    pub advance_scale: f32,
    pub advance_offset: f32,
    pub line_scale: f32,
    pub first_glyph: u32,
}

impl BoxFont {
    /// Advance equals `size + 1`: fits a 16 px cell up to size 14
    pub const fn monospace() -> Self {
        Self {
            advance_scale: 1.0,
            advance_offset: 1.0,
            line_scale: 1.5,
            first_glyph: 32,
        }
    }

    /// Already wider than a 16 px cell at size 10
    pub const fn too_wide() -> Self {
        Self {
            advance_scale: 1.0,
            advance_offset: 8.0,
            line_scale: 1.5,
            first_glyph: 32,
        }
    }

    /// Never grows, so no size ever overflows a cell
    pub const fn never_grows() -> Self {
        Self {
            advance_scale: 0.0,
            advance_offset: 1.0,
            line_scale: 0.0,
            first_glyph: 32,
        }
    }

    fn box_glyph(size: f32, coverage: u8) -> GlyphBitmap {
        let width = ((size * 0.5) as usize).max(1);
        let height = ((size * 0.7) as usize).max(1);
        GlyphBitmap {
            width,
            height,
            xmin: 1,
            ymin: 0,
            coverage: vec![coverage; width * height],
        }
    }
}

impl GlyphSource for BoxFont {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let advance = size * self.advance_scale + self.advance_offset;
        TextExtent {
            width: (advance * text.chars().count() as f32).ceil() as u32,
            height: (size * self.line_scale).ceil() as u32,
        }
    }

    fn ascent(&self, size: f32) -> f32 {
        size * 1.2
    }

    fn has_glyph(&self, ch: char) -> bool {
        ch as u32 >= self.first_glyph
    }

    fn rasterize(&self, ch: char, size: f32) -> GlyphBitmap {
        if self.has_glyph(ch) {
            Self::box_glyph(size, 255)
        } else {
            self.rasterize_fallback(size)
        }
    }

    fn rasterize_fallback(&self, size: f32) -> GlyphBitmap {
        Self::box_glyph(size, FALLBACK_COVERAGE)
    }
}

/// Font whose glyphs are far larger than any cell
#[derive(Debug, Clone, Copy)]
pub struct HugeGlyphFont;

impl GlyphSource for HugeGlyphFont {
    fn measure(&self, _text: &str, _size: f32) -> TextExtent {
        TextExtent { width: 1, height: 1 }
    }

    fn ascent(&self, _size: f32) -> f32 {
        0.0
    }

    fn has_glyph(&self, _ch: char) -> bool {
        true
    }

    fn rasterize(&self, _ch: char, _size: f32) -> GlyphBitmap {
        GlyphBitmap {
            width: 40,
            height: 40,
            xmin: -4,
            ymin: -36,
            coverage: vec![255; 40 * 40],
        }
    }

    fn rasterize_fallback(&self, size: f32) -> GlyphBitmap {
        self.rasterize('\0', size)
    }
}
