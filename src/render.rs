use std::path::Path;

use serde_json::{json, Value};

use crate::{
    chunks::plte::PLTEChunk,
    color::Color,
    error::Error,
    geometry::{Canvas, CellPos, GridLayout, Region},
    planes::Plane,
    png::encode,
};

pub trait Render {
    fn render(&self) -> Result<Vec<u8>, Error>;

    /// Human-readable parameters, e.g. `16x16 #f97316`.
    fn describe(&self) -> String;

    fn to_json(&self) -> Value;
}

#[derive(Debug, Clone)]
pub struct SolidImage {
    pub canvas: Canvas,
    pub color: Color,
}
impl Render for SolidImage {
    fn render(&self) -> Result<Vec<u8>, Error> {
        let palette = PLTEChunk::new(vec![self.color])?;
        encode(&Plane::solid(self.canvas), &palette)
    }

    fn describe(&self) -> String {
        format!("{} {}", self.canvas, self.color)
    }

    fn to_json(&self) -> Value {
        json!({
            "kind": "solid",
            "width": self.canvas.width,
            "height": self.canvas.height,
            "color": self.color.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SquareImage {
    pub canvas: Canvas,
    pub main: Color,
    pub accent: Color,
    pub square: u32,
}
impl Render for SquareImage {
    fn render(&self) -> Result<Vec<u8>, Error> {
        let region = Region::square(self.canvas, self.square)?;
        let palette = PLTEChunk::new(vec![self.accent, self.main])?;
        encode(&Plane::accent(self.canvas, region), &palette)
    }

    fn describe(&self) -> String {
        format!(
            "{} main={} accent={} square={}px",
            self.canvas, self.main, self.accent, self.square
        )
    }

    fn to_json(&self) -> Value {
        json!({
            "kind": "square",
            "width": self.canvas.width,
            "height": self.canvas.height,
            "main": self.main.to_string(),
            "accent": self.accent.to_string(),
            "square": self.square,
        })
    }
}

/// Accent cell addressed on a centered grid, with the grid lines drawn only
/// when `grid` carries a line color.
#[derive(Debug, Clone)]
pub struct GridImage {
    pub canvas: Canvas,
    pub main: Color,
    pub accent: Color,
    pub cell: u32,
    pub accent_cell: CellPos,
    pub grid: Option<Color>,
}
impl GridImage {
    pub fn layout(&self) -> Result<GridLayout, Error> {
        GridLayout::new(self.canvas, self.cell)
    }
}
impl Render for GridImage {
    fn render(&self) -> Result<Vec<u8>, Error> {
        let layout = self.layout()?;
        let region = layout.cell_region(self.accent_cell)?;
        match self.grid {
            Some(line_color) => {
                let palette = PLTEChunk::new(vec![self.accent, self.main, line_color])?;
                encode(&Plane::grid(self.canvas, region, &layout), &palette)
            }
            None => {
                let palette = PLTEChunk::new(vec![self.accent, self.main])?;
                encode(&Plane::accent(self.canvas, region), &palette)
            }
        }
    }

    fn describe(&self) -> String {
        let grid = match self.grid {
            Some(color) => format!("grid={color} cell={}px", self.cell),
            None => "no grid".to_owned(),
        };
        format!(
            "{} main={} accent={} accent-cell={} {grid}",
            self.canvas, self.main, self.accent, self.accent_cell
        )
    }

    fn to_json(&self) -> Value {
        json!({
            "kind": "grid",
            "width": self.canvas.width,
            "height": self.canvas.height,
            "main": self.main.to_string(),
            "accent": self.accent.to_string(),
            "accent_cell": [self.accent_cell.col, self.accent_cell.row],
            "cell": self.cell,
            "grid": self.grid.map(|c| c.to_string()),
        })
    }
}

/// `<path>: <description> (<len> bytes)`
pub fn summary(path: &Path, image: &impl Render, len: usize) -> String {
    format!("{}: {} ({len} bytes)", path.display(), image.describe())
}

pub fn summary_json(path: &Path, image: &impl Render, len: usize) -> Value {
    json!({
        "path": path.display().to_string(),
        "bytes": len,
        "image": image.to_json(),
    })
}
