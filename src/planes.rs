use std::ops::Range;

use crate::{
    geometry::{Canvas, GridLayout, Region},
    scanlines::{pack, BitDepth},
};

pub const ACCENT: u8 = 0;
pub const BACKGROUND: u8 = 1;
pub const GRID: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowKey {
    pub accent_band: bool,
    pub grid_line: bool,
}
impl RowKey {
    const ALL: [RowKey; 4] = [
        RowKey::new(false, false),
        RowKey::new(true, false),
        RowKey::new(false, true),
        RowKey::new(true, true),
    ];

    const fn new(accent_band: bool, grid_line: bool) -> Self {
        Self {
            accent_band,
            grid_line,
        }
    }

    const fn slot(self) -> usize {
        self.accent_band as usize | (self.grid_line as usize) << 1
    }
}

/// Marks the 2px lines straddling each cell boundary along one axis.
///
/// For a boundary `b`, pixel `b - 1` is marked when `0 < b < dimension` and
/// pixel `b` when `b < dimension`.
pub fn line_mask(dimension: u32, margin: u32, full: u32, cell: u32) -> Vec<bool> {
    let dimension = dimension as usize;
    let mut mask = vec![false; dimension];
    for n in 0..=full as usize {
        let boundary = margin as usize + n * cell as usize;
        if boundary >= dimension {
            continue;
        }
        if boundary > 0 {
            mask[boundary - 1] = true;
        }
        mask[boundary] = true;
    }
    mask
}

struct Lines {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct Plane {
    canvas: Canvas,
    depth: BitDepth,
    accent_rows: Range<u32>,
    grid_rows: Option<Vec<bool>>,
    patterns: Vec<Vec<u8>>,
}
impl Plane {
    pub fn solid(canvas: Canvas) -> Self {
        let indices = vec![ACCENT; canvas.width as usize];
        Self {
            canvas,
            depth: BitDepth::One,
            accent_rows: 0..0,
            grid_rows: None,
            patterns: vec![pack(&indices, BitDepth::One)],
        }
    }

    pub fn accent(canvas: Canvas, accent: Region) -> Self {
        Self::build(canvas, accent, None)
    }

    /// Accent cell over grid lines drawn at every cell boundary, 2 bits per
    /// pixel. The accent wins wherever it overlaps a line.
    pub fn grid(canvas: Canvas, accent: Region, layout: &GridLayout) -> Self {
        let cell = layout.cell;
        let lines = Lines {
            rows: line_mask(canvas.height, layout.v_margin, layout.full_rows, cell),
            cols: line_mask(canvas.width, layout.h_margin, layout.full_cols, cell),
        };
        Self::build(canvas, accent, Some(lines))
    }

    fn build(canvas: Canvas, accent: Region, lines: Option<Lines>) -> Self {
        let all: &'static [RowKey] = &RowKey::ALL;
        let (depth, keys) = match lines {
            Some(_) => (BitDepth::Two, all),
            None => (BitDepth::One, &all[..2]),
        };
        let accent_cols = accent.columns();
        let line_cols = lines.as_ref().map(|l| &l.cols);
        let patterns = keys
            .iter()
            .map(|key| {
                let indices: Vec<u8> = (0..canvas.width)
                    .map(|x| {
                        let in_accent = key.accent_band && accent_cols.contains(&x);
                        let on_line = key.grid_line || line_cols.is_some_and(|c| c[x as usize]);
                        classify(in_accent, on_line)
                    })
                    .collect();
                pack(&indices, depth)
            })
            .collect();
        log::debug!(
            "{} row patterns for {canvas} at {} bpp",
            keys.len(),
            depth.bits()
        );
        Self {
            canvas,
            depth,
            accent_rows: accent.rows(),
            grid_rows: lines.map(|l| l.rows),
            patterns,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    pub fn key(&self, y: u32) -> RowKey {
        RowKey {
            accent_band: self.accent_rows.contains(&y),
            grid_line: self.grid_rows.as_ref().is_some_and(|r| r[y as usize]),
        }
    }

    pub fn row(&self, y: u32) -> &[u8] {
        &self.patterns[self.key(y).slot()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.canvas.height).map(|y| self.row(y))
    }

    /// Number of patterns computed, not the number actually used.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

const fn classify(in_accent: bool, on_line: bool) -> u8 {
    if in_accent {
        ACCENT
    } else if on_line {
        GRID
    } else {
        BACKGROUND
    }
}
