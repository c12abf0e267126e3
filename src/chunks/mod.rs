use std::borrow::Cow;

use nom::{bytes::complete::take, combinator::map_res, number::complete::be_u32, IResult};

use crate::{crc::chunk_crc, error::Error};

pub mod idat;
pub mod iend;
pub mod ihdr;
pub mod plte;

/// Largest payload a chunk length field may declare.
pub const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// Serializes `length ∥ type ∥ data ∥ crc32(type ∥ data)`.
pub fn frame(chunk_type: &[u8; 4], data: &[u8]) -> Result<Vec<u8>, Error> {
    if data.len() > MAX_CHUNK_LEN {
        return Err(Error::ChunkTooLarge {
            chunk_type: String::from_utf8_lossy(chunk_type).into_owned(),
            len: data.len(),
        });
    }
    let mut bytes = Vec::with_capacity(data.len() + 12);
    bytes.extend((data.len() as u32).to_be_bytes());
    bytes.extend(chunk_type);
    bytes.extend(data);
    bytes.extend(chunk_crc(chunk_type, data).to_be_bytes());
    Ok(bytes)
}

pub trait ParseableChunk<'a>: Sized {
    const HEADER: &'static [u8; 4];

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self>;
    fn data(&self) -> Cow<'_, [u8]>;

    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        frame(Self::HEADER, &self.data())
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Chunk<'a> {
    IHDR(ihdr::IHDRChunk),
    PLTE(plte::PLTEChunk),
    IDAT(idat::IDATChunk<'a>),
    IEND,
    Unknown(RawChunk<'a>),
}

/// A framed chunk as it appears in the file, payload not yet interpreted.
#[derive(Debug, Clone, Copy)]
pub struct RawChunk<'a> {
    pub chunk_type: &'a [u8; 4],
    pub data: &'a [u8],
    pub crc: u32,
}
impl<'a> RawChunk<'a> {
    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(self.chunk_type).into_owned()
    }

    pub fn crc_matches(&self) -> bool {
        chunk_crc(self.chunk_type, self.data) == self.crc
    }

    pub fn parse(self) -> Result<Chunk<'a>, Error> {
        Ok(match self.chunk_type {
            b"IHDR" => Chunk::IHDR(parse_payload(self.data)?),
            b"PLTE" => Chunk::PLTE(parse_payload(self.data)?),
            b"IDAT" => Chunk::IDAT(parse_payload(self.data)?),
            b"IEND" => {
                parse_payload::<iend::IENDChunk>(self.data)?;
                Chunk::IEND
            }
            _ => Chunk::Unknown(self),
        })
    }
}

fn parse_payload<'a, C: ParseableChunk<'a>>(data: &'a [u8]) -> Result<C, Error> {
    let name = || String::from_utf8_lossy(C::HEADER).into_owned();
    let (rest, chunk) =
        C::from_bytes(data).map_err(|_| Error::Malformed(format!("bad {} payload", name())))?;
    if !rest.is_empty() {
        return Err(Error::Malformed(format!(
            "{} trailing bytes in {} payload",
            rest.len(),
            name()
        )));
    }
    Ok(chunk)
}

fn raw_chunk<'a>(input: &'a [u8]) -> IResult<&'a [u8], RawChunk<'a>> {
    let (input, length) = be_u32(input)?;
    let to_tag = |t: &'a [u8]| <&'a [u8; 4]>::try_from(t);
    let (input, chunk_type) = map_res(take(4usize), to_tag)(input)?;
    let (input, data) = take(length)(input)?;
    let (input, crc) = be_u32(input)?;
    Ok((
        input,
        RawChunk {
            chunk_type,
            data,
            crc,
        },
    ))
}

/// Walks the chunks following the signature, stopping after `IEND`, at the
/// end of input, or at the first truncated or corrupt chunk.
pub fn iter_chunks(source: &[u8]) -> ChunkIter<'_> {
    ChunkIter {
        source,
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<RawChunk<'a>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.source.is_empty() {
            return None;
        }
        match raw_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.source = rest;
                if chunk.chunk_type == b"IEND" {
                    self.finished = true;
                }
                if !chunk.crc_matches() {
                    self.finished = true;
                    return Some(Err(Error::ChecksumMismatch {
                        chunk_type: chunk.type_name(),
                    }));
                }
                Some(Ok(chunk))
            }
            Err(_) => {
                self.finished = true;
                Some(Err(Error::Truncated))
            }
        }
    }
}
