use std::marker::PhantomData;

use nom::{bytes::complete::tag, IResult};

use crate::{
    chunks::{
        ihdr::{ColorType, IHDRChunk, Interlacing},
        iter_chunks,
        plte::PLTEChunk,
        Chunk, ChunkIter, RawChunk,
    },
    color::Color,
    error::Error,
    image_data::{decompress, unfiltered_rows},
    png::SIGNATURE,
    scanlines::{scanline_len, unpack, BitDepth},
};

pub struct PNGDecoder<'a, State>(ChunkIter<'a>, PhantomData<State>);

pub struct Start;
pub struct Body;

impl<'a> PNGDecoder<'a, Start> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let (rest, _) = parse_signature(data).map_err(|_| Error::Signature)?;
        Ok(Self(iter_chunks(rest), PhantomData))
    }

    pub fn parse_ihdr(mut self) -> Result<(PNGDecoder<'a, Body>, IHDRChunk), Error> {
        match self.next_chunk()? {
            Some(Chunk::IHDR(header)) => Ok((PNGDecoder(self.0, PhantomData), header)),
            _ => Err(Error::Malformed("IHDR must be the first chunk".into())),
        }
    }
}

impl<'a> PNGDecoder<'a, Body> {
    /// Reads through `IEND`, returning the palette and the joined `IDAT`
    /// payloads.
    pub fn parse_body(mut self) -> Result<(Option<PLTEChunk>, Vec<u8>), Error> {
        let mut palette = None;
        let mut compressed = vec![];
        loop {
            match self.next_chunk()? {
                Some(Chunk::PLTE(plte)) => {
                    if palette.is_some() || !compressed.is_empty() {
                        return Err(Error::Malformed("misplaced PLTE chunk".into()));
                    }
                    palette = Some(plte);
                }
                Some(Chunk::IDAT(idat)) => compressed.extend_from_slice(&idat.data),
                Some(Chunk::IEND) if compressed.is_empty() => {
                    return Err(Error::Malformed("no IDAT chunk".into()))
                }
                Some(Chunk::IEND) => return Ok((palette, compressed)),
                Some(Chunk::IHDR(_)) => {
                    return Err(Error::Malformed("duplicate IHDR chunk".into()))
                }
                Some(Chunk::Unknown(raw)) => log::debug!("skipping {} chunk", raw.type_name()),
                None => return Err(Error::Malformed("missing IEND chunk".into())),
            }
        }
    }
}

impl<'a, S> PNGDecoder<'a, S> {
    fn next_chunk(&mut self) -> Result<Option<Chunk<'a>>, Error> {
        self.0.next().transpose()?.map(RawChunk::parse).transpose()
    }
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&SIGNATURE[..])(input)
}

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub header: IHDRChunk,
    pub palette: PLTEChunk,
    indices: Vec<u8>,
}
impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.indices
            .get(y as usize * self.width() as usize + x as usize)
            .copied()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.palette.get_color(self.index(x, y)?)
    }
}

pub fn decode(bytes: &[u8]) -> Result<DecodedImage, Error> {
    let (decoder, header) = PNGDecoder::new(bytes)?.parse_ihdr()?;
    if header.color_type != ColorType::IndexedColor {
        return Err(Error::Unsupported(format!("{:?} color", header.color_type)));
    }
    if header.interlace_method != Interlacing::None {
        return Err(Error::Unsupported("interlaced images".into()));
    }
    if header.compression_method != 0 || header.filter_method != 0 {
        return Err(Error::Malformed(
            "unknown compression or filter method".into(),
        ));
    }
    if header.width == 0 || header.height == 0 {
        return Err(Error::Malformed("zero image dimension".into()));
    }
    let depth = BitDepth::try_from(header.bit_depth)?;

    let (palette, compressed) = decoder.parse_body()?;
    let palette = palette.ok_or_else(|| Error::Malformed("indexed image without PLTE".into()))?;
    let data = decompress(&compressed)?;

    let width = header.width as usize;
    let rows = unfiltered_rows(&data, scanline_len(width, depth), header.height as usize)?;
    let mut indices = Vec::with_capacity(width * rows.len());
    for row in rows {
        indices.extend(unpack(row, width, depth));
    }
    if let Some(bad) = indices.iter().find(|&&i| palette.get_color(i).is_none()) {
        return Err(Error::Malformed(format!(
            "index {bad} outside {}-entry palette",
            palette.colors().len()
        )));
    }

    Ok(DecodedImage {
        header,
        palette,
        indices,
    })
}

/// One line per chunk: type, payload length and, for the header and palette,
/// their decoded fields.
pub fn describe_chunks(bytes: &[u8]) -> Result<Vec<String>, Error> {
    let (rest, _) = parse_signature(bytes).map_err(|_| Error::Signature)?;
    iter_chunks(rest)
        .map(|raw| {
            let raw = raw?;
            let fields = match raw.parse()? {
                Chunk::IHDR(h) => format!(
                    ": {}x{}, {}-bit {:?}",
                    h.width, h.height, h.bit_depth, h.color_type
                ),
                Chunk::PLTE(p) => {
                    let colors: Vec<_> = p.colors().iter().map(Color::to_string).collect();
                    format!(": {}", colors.join(" "))
                }
                _ => String::new(),
            };
            Ok(format!(
                "{} {} bytes{fields}",
                raw.type_name(),
                raw.data.len()
            ))
        })
        .collect()
}
