pub mod chunks;
pub mod cli;
mod color;
mod crc;
pub mod decoder;
mod error;
mod geometry;
mod image_data;
pub mod output;
pub mod parse;
pub mod planes;
mod png;
pub mod render;
pub mod scanlines;

pub use color::{Color, DEFAULT_GRID_COLOR};
pub use decoder::{decode, DecodedImage};
pub use error::{Error, Result};
pub use geometry::{Canvas, CellPos, GridLayout, Region};
pub use png::{encode, SIGNATURE};
pub use render::{GridImage, Render, SolidImage, SquareImage};
