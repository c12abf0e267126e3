use std::borrow::Cow;

use crate::{
    chunks::{idat::IDATChunk, iend::IENDChunk, ihdr::IHDRChunk, plte::PLTEChunk, ParseableChunk},
    error::Error,
    image_data::compress_rows,
    planes::Plane,
    scanlines::scanline_len,
};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Writes `plane` as an indexed-color PNG using `palette`.
///
/// The bit depth follows from the palette size and must match the depth the
/// plane was packed at.
pub fn encode(plane: &Plane, palette: &PLTEChunk) -> Result<Vec<u8>, Error> {
    let canvas = plane.canvas();
    let depth = palette.bit_depth();
    if depth != plane.bit_depth() {
        return Err(Error::PaletteSize(palette.colors().len()));
    }
    let header = IHDRChunk::indexed(canvas, depth);

    let row_len = scanline_len(canvas.width as usize, depth);
    let compressed = compress_rows(plane.rows(), row_len, canvas.height as usize);
    let idat = IDATChunk {
        data: Cow::Owned(compressed),
    };

    let mut bytes = SIGNATURE.to_vec();
    bytes.extend(header.to_bytes()?);
    bytes.extend(palette.to_bytes()?);
    bytes.extend(idat.to_bytes()?);
    bytes.extend(IENDChunk.to_bytes()?);
    log::info!(
        "encoded {canvas} at {} bpp with {} palette entries: {} bytes",
        depth.bits(),
        palette.colors().len(),
        bytes.len()
    );
    Ok(bytes)
}
