use std::borrow::Cow;

use nom::{
    combinator::map_res,
    number::complete::{be_u32, be_u8},
    sequence::tuple,
    IResult,
};

use super::ParseableChunk;
use crate::{error::Error, geometry::Canvas, scanlines::BitDepth};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IHDRChunk {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: Interlacing,
}
impl IHDRChunk {
    /// Header for a non-interlaced indexed-color image.
    pub fn indexed(canvas: Canvas, depth: BitDepth) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            bit_depth: depth.bits() as u8,
            color_type: ColorType::IndexedColor,
            compression_method: 0,
            filter_method: 0,
            interlace_method: Interlacing::None,
        }
    }
}
impl<'a> ParseableChunk<'a> for IHDRChunk {
    const HEADER: &'static [u8; 4] = b"IHDR";

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self> {
        let (rest, (width, height)) = tuple((be_u32, be_u32))(chunk_data)?;
        let (rest, (bit_depth, color_type, compression_method)) =
            tuple((be_u8, map_res(be_u8, ColorType::try_from), be_u8))(rest)?;
        let (rest, (filter_method, interlace_method)) =
            tuple((be_u8, map_res(be_u8, Interlacing::try_from)))(rest)?;
        Ok((
            rest,
            IHDRChunk {
                width,
                height,
                bit_depth,
                color_type,
                compression_method,
                filter_method,
                interlace_method,
            },
        ))
    }

    fn data(&self) -> Cow<'_, [u8]> {
        let mut bytes = Vec::with_capacity(13);
        bytes.extend(self.width.to_be_bytes());
        bytes.extend(self.height.to_be_bytes());
        bytes.extend([
            self.bit_depth,
            self.color_type as u8,
            self.compression_method,
            self.filter_method,
            self.interlace_method as u8,
        ]);
        Cow::Owned(bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Greyscale = 0,
    Truecolor = 2,
    IndexedColor = 3,
    GreyscaleWithAlpha = 4,
    TruecolorWithAlpha = 6,
}
impl TryFrom<u8> for ColorType {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleWithAlpha),
            6 => Ok(Self::TruecolorWithAlpha),
            v => Err(Error::Malformed(format!("color type {v}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlacing {
    None,
    Adam7,
}
impl TryFrom<u8> for Interlacing {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Adam7),
            v => Err(Error::Malformed(format!("interlace method {v}"))),
        }
    }
}
