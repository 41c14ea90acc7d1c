//! Cell grid geometry
//!
//! Splits the canvas into equally sized cells and maps between cell
//! positions, code points and texture coordinates. Cell `(column, row)`
//! holds code point `row * columns + column`.

use nalgebra::Vector2;
use thiserror::Error;

use crate::config::GridConfig;

/// Errors raised when a grid cannot tile its canvas
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Cell width or height is zero
    #[error("Cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize {
        /// Requested cell width
        width: u32,
        /// Requested cell height
        height: u32,
    },

    /// Canvas width or height is zero
    #[error("Canvas size must be non-zero, got {width}x{height}")]
    ZeroCanvasSize {
        /// Requested canvas width
        width: u32,
        /// Requested canvas height
        height: u32,
    },

    /// A canvas dimension is not a multiple of the cell dimension
    #[error("Canvas {axis} {canvas} is not a multiple of cell {axis} {cell}")]
    UnevenDivision {
        /// "width" or "height"
        axis: &'static str,
        /// Canvas extent along the axis
        canvas: u32,
        /// Cell extent along the axis
        cell: u32,
    },
}

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index, `0..columns`
    pub column: u32,
    /// Row index, `0..rows`
    pub row: u32,
    /// Code point stored in this cell
    pub code_point: u32,
    /// Left edge in canvas pixels
    pub origin_x: u32,
    /// Top edge in canvas pixels
    pub origin_y: u32,
}

/// Normalized texture coordinates of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    /// Top-left corner (0.0-1.0)
    pub uv_min: Vector2<f32>,
    /// Bottom-right corner (0.0-1.0)
    pub uv_max: Vector2<f32>,
}

/// Fixed grid of cells that exactly tiles the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    canvas_width: u32,
    canvas_height: u32,
    cell_width: u32,
    cell_height: u32,
    columns: u32,
    rows: u32,
}

impl CellGrid {
    /// Create a grid, failing unless the cells divide the canvas evenly
    pub const fn new(
        canvas_width: u32,
        canvas_height: u32,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, GeometryError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GeometryError::ZeroCellSize { width: cell_width, height: cell_height });
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(GeometryError::ZeroCanvasSize { width: canvas_width, height: canvas_height });
        }
        if canvas_width % cell_width != 0 {
            return Err(GeometryError::UnevenDivision { axis: "width", canvas: canvas_width, cell: cell_width });
        }
        if canvas_height % cell_height != 0 {
            return Err(GeometryError::UnevenDivision { axis: "height", canvas: canvas_height, cell: cell_height });
        }

        Ok(Self {
            canvas_width,
            canvas_height,
            cell_width,
            cell_height,
            columns: canvas_width / cell_width,
            rows: canvas_height / cell_height,
        })
    }

    /// Create a grid from configuration
    pub const fn from_config(config: &GridConfig) -> Result<Self, GeometryError> {
        Self::new(config.canvas_width, config.canvas_height, config.cell_width, config.cell_height)
    }

    /// Number of cells per row
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells, which is also the number of code points covered
    pub const fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Cell dimensions as (width, height)
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Canvas dimensions as (width, height)
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Cell at a grid position
    pub const fn cell(&self, column: u32, row: u32) -> Option<Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(Cell {
            column,
            row,
            code_point: row * self.columns + column,
            origin_x: column * self.cell_width,
            origin_y: row * self.cell_height,
        })
    }

    /// Cell holding a code point, if the grid covers it
    pub const fn cell_of(&self, code_point: u32) -> Option<Cell> {
        if code_point >= self.cell_count() {
            return None;
        }
        self.cell(code_point % self.columns, code_point / self.columns)
    }

    /// All cells in row-major order (row outer, column inner)
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).filter_map(move |column| self.cell(column, row))
        })
    }

    /// Normalized texture coordinates for a code point's cell
    pub fn uv_rect(&self, code_point: u32) -> Option<UvRect> {
        let cell = self.cell_of(code_point)?;
        let width = self.canvas_width as f32;
        let height = self.canvas_height as f32;

        Some(UvRect {
            uv_min: Vector2::new(cell.origin_x as f32 / width, cell.origin_y as f32 / height),
            uv_max: Vector2::new(
                (cell.origin_x + self.cell_width) as f32 / width,
                (cell.origin_y + self.cell_height) as f32 / height,
            ),
        })
    }
}
