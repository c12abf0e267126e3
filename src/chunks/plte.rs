use std::borrow::Cow;

use nom::{bytes::complete::take, combinator::map, multi::many1, IResult};

use super::ParseableChunk;
use crate::{color::Color, error::Error, scanlines::BitDepth};

/// Palette in role order: accent, background, grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PLTEChunk {
    colors: Vec<Color>,
}
impl PLTEChunk {
    /// Palettes written by this crate hold one to three colors.
    pub fn new(colors: Vec<Color>) -> Result<Self, Error> {
        if colors.is_empty() || colors.len() > 3 {
            return Err(Error::PaletteSize(colors.len()));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get_color(&self, index: u8) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Smallest depth that addresses every entry.
    pub fn bit_depth(&self) -> BitDepth {
        if self.colors.len() <= 2 {
            BitDepth::One
        } else {
            BitDepth::Two
        }
    }
}
impl<'a> ParseableChunk<'a> for PLTEChunk {
    const HEADER: &'static [u8; 4] = b"PLTE";

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self> {
        let (rest, colors) = many1(map(take(3usize), |rgb: &[u8]| {
            Color::new(rgb[0], rgb[1], rgb[2])
        }))(chunk_data)?;
        Ok((rest, PLTEChunk { colors }))
    }

    fn data(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.colors.iter().flat_map(|c| c.to_bytes()).collect())
    }
}
