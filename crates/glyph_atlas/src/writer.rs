//! Atlas image output
//!
//! The canvas is written as an 8-bit grayscale PNG. PNG encoding is
//! deterministic, so identical canvases produce identical files.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors raised while writing the atlas
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the output directory
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding or file write failed
    #[error("Failed to write atlas image: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode the canvas as PNG bytes
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, WriteError> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write the canvas to `path` as PNG, creating missing parent directories
pub fn write_atlas<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), WriteError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    canvas.as_image().save_with_format(path, ImageFormat::Png)?;

    let (width, height) = canvas.dimensions();
    log::info!("Wrote {}x{} atlas to {:?}", width, height, path);
    Ok(())
}
