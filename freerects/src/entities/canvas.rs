use crate::Cell;
use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};

/// The fixed-size bounded region in which items are placed.
/// Dimensions are immutable for the lifetime of the canvas.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: Cell,
    pub height: Cell,
}

impl Canvas {
    pub fn new(width: Cell, height: Cell) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "canvas dimensions must be strictly positive: {width}x{height}"
        );
        Ok(Canvas { width, height })
    }

    /// The full extent of the canvas: `[0, width) × [0, height)`.
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0,
            y_min: 0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// Total number of cells in the canvas.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
