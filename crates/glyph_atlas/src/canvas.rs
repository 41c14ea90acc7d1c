//! Single-channel atlas canvas
//!
//! A zero-initialized 8-bit grayscale buffer backed by [`image::GrayImage`].
//! All writes are bounds-checked; nothing lands outside the canvas.

use image::{GrayImage, Luma};

use crate::geometry::CellGrid;

/// Grayscale canvas the glyphs are drawn onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: GrayImage,
}

impl Canvas {
    /// Allocate a black canvas
    pub fn new(width: u32, height: u32) -> Self {
        log::debug!("Allocating {}x{} grayscale canvas", width, height);
        Self { image: GrayImage::new(width, height) }
    }

    /// Allocate a black canvas sized for a grid
    pub fn for_grid(grid: &CellGrid) -> Self {
        let (width, height) = grid.canvas_size();
        Self::new(width, height)
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Canvas dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Intensity at a pixel, `None` outside the canvas
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    /// Composite `fill` over one pixel with the given coverage
    ///
    /// `out = (fill * coverage + dst * (255 - coverage)) / 255`, rounded.
    /// Returns `false` without writing when the pixel is off-canvas.
    pub fn blend(&mut self, x: i64, y: i64, coverage: u8, fill: u8) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return false;
        };

        let alpha = u32::from(coverage);
        let dst = u32::from(pixel.0[0]);
        let out = (u32::from(fill) * alpha + dst * (255 - alpha) + 127) / 255;
        *pixel = Luma([out as u8]);
        true
    }

    /// Number of non-zero pixels inside a rectangle, clamped to the canvas
    pub fn lit_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> usize {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        (y..y_end)
            .flat_map(|py| (x..x_end).map(move |px| (px, py)))
            .filter(|&(px, py)| self.image.get_pixel(px, py).0[0] != 0)
            .count()
    }

    /// Raw row-major pixel data
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the underlying image
    pub const fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Consume the canvas, returning the underlying image
    pub fn into_image(self) -> GrayImage {
        self.image
    }
}
