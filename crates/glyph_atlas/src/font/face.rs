//! TrueType/OpenType font face backed by `fontdue`

use std::path::Path;

use fontdue::{Font, FontSettings};

use super::{FontError, FontResult, GlyphBitmap, GlyphSource, TextExtent};

/// Glyph index fontdue maps unknown characters to
const NOTDEF_GLYPH: u16 = 0;

/// A loaded font, usable at any pixel size
pub struct FontFace {
    font: Font,
}

impl FontFace {
    /// Parse a font from raw TTF/OTF bytes
    pub fn from_bytes(font_data: &[u8]) -> FontResult<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;

        log::info!(
            "Loaded font {} ({} glyphs)",
            font.name().unwrap_or("<unnamed>"),
            font.glyph_count()
        );

        Ok(Self { font })
    }

    /// Read and parse a font file
    pub fn from_file<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading font from: {:?}", path);

        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Font family name, when the font declares one
    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }

    /// Number of glyphs in the font
    pub fn glyph_count(&self) -> u16 {
        self.font.glyph_count()
    }

    fn bitmap(metrics: fontdue::Metrics, coverage: Vec<u8>) -> GlyphBitmap {
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            coverage,
        }
    }
}

impl GlyphSource for FontFace {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        // Ink box as drawn from a cell origin: baseline one rounded ascent
        // down, each glyph placed at the rounded pen position
        let baseline = self.ascent(size).round() as i64;
        let mut pen = 0.0_f32;
        let mut right = 0_i64;
        let mut top = baseline;
        let mut below = 0_i64;

        for ch in text.chars() {
            let metrics = self.font.metrics(ch, size);
            if metrics.width > 0 && metrics.height > 0 {
                let ymin = i64::from(metrics.ymin);
                right = right.max(pen.round() as i64 + i64::from(metrics.xmin) + metrics.width as i64);
                top = top.max(ymin + metrics.height as i64);
                below = below.max(-ymin);
            }
            pen += metrics.advance_width;
        }

        let width = right.max(pen.round() as i64);
        TextExtent {
            width: width.max(0) as u32,
            height: (top + below).max(0) as u32,
        }
    }

    fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map_or(size, |line| line.ascent)
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != NOTDEF_GLYPH
    }

    fn rasterize(&self, ch: char, size: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(ch, size);
        Self::bitmap(metrics, coverage)
    }

    fn rasterize_fallback(&self, size: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize_indexed(NOTDEF_GLYPH, size);
        Self::bitmap(metrics, coverage)
    }
}
