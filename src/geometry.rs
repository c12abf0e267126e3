use std::{fmt, ops::Range, str::FromStr};

use crate::{error::Error, parse};

/// Largest side a PNG header can carry.
pub const MAX_SIDE: u32 = i32::MAX as u32;

/// Image size in pixels. Both sides are in `1..=MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}
impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(Error::CanvasTooLarge { width, height });
        }
        Ok(Self { width, height })
    }
}
impl FromStr for Canvas {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse::dims(s)?;
        Self::new(width, height)
    }
}
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Zero-indexed grid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPos {
    pub col: u32,
    pub row: u32,
}
impl FromStr for CellPos {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = parse::cell_pos(s)?;
        Ok(Self { col, row })
    }
}
impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.col, self.row)
    }
}

/// Square pixel area `[x, x + size) x [y, y + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}
impl Region {
    /// Square flush with the top-left corner of the canvas.
    pub fn square(canvas: Canvas, size: u32) -> Result<Self, Error> {
        if size == 0 || size > canvas.width || size > canvas.height {
            return Err(Error::SquareOutOfRange {
                size,
                width: canvas.width,
                height: canvas.height,
            });
        }
        Ok(Self { x: 0, y: 0, size })
    }

    pub fn columns(&self) -> Range<u32> {
        self.x..self.x + self.size
    }

    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.size
    }
}

/// Whole cells that fit on a canvas, centered by a leading margin.
///
/// The leading margin is `(dimension - full * cell) / 2`, truncated, so an odd
/// leftover puts the extra pixel in the trailing margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cell: u32,
    pub full_cols: u32,
    pub h_margin: u32,
    pub full_rows: u32,
    pub v_margin: u32,
}
impl GridLayout {
    pub fn new(canvas: Canvas, cell: u32) -> Result<Self, Error> {
        if cell == 0 {
            return Err(Error::ZeroCell);
        }
        let (full_cols, h_margin) = fit(canvas.width, cell);
        let (full_rows, v_margin) = fit(canvas.height, cell);
        log::debug!(
            "{canvas} / {cell}px: {full_cols}x{full_rows} cells, margins {h_margin}x{v_margin}"
        );
        Ok(Self {
            cell,
            full_cols,
            h_margin,
            full_rows,
            v_margin,
        })
    }

    /// Pixel area of the cell at `pos`; addresses outside the grid are an error.
    pub fn cell_region(&self, pos: CellPos) -> Result<Region, Error> {
        if pos.col >= self.full_cols || pos.row >= self.full_rows {
            return Err(Error::CellOutOfRange {
                col: pos.col,
                row: pos.row,
                cols: self.full_cols,
                rows: self.full_rows,
            });
        }
        Ok(Region {
            x: self.h_margin + pos.col * self.cell,
            y: self.v_margin + pos.row * self.cell,
            size: self.cell,
        })
    }
}

const fn fit(dimension: u32, cell: u32) -> (u32, u32) {
    let full = dimension / cell;
    (full, (dimension - full * cell) / 2)
}
