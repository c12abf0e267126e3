use std::borrow::Cow;

use super::ParseableChunk;
use nom::IResult;

/// Compressed image data, borrowed when read and owned when written.
#[derive(Debug)]
pub struct IDATChunk<'a> {
    pub data: Cow<'a, [u8]>,
}
impl<'a> ParseableChunk<'a> for IDATChunk<'a> {
    const HEADER: &'static [u8; 4] = b"IDAT";

    fn from_bytes(chunk_data: &'a [u8]) -> IResult<&'a [u8], Self> {
        Ok((
            &chunk_data[0..0],
            IDATChunk {
                data: Cow::Borrowed(chunk_data),
            },
        ))
    }

    fn data(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }
}
