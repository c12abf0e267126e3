use miniz_oxide::{
    deflate::{compress_to_vec_zlib, CompressionLevel},
    inflate::decompress_to_vec_zlib,
};

use crate::error::Error;

/// Filter type 0: the scanline is stored as is.
pub(crate) const FILTER_NONE: u8 = 0;

/// Prefixes every scanline with the `None` filter byte and deflates the
/// result at the highest level.
pub(crate) fn compress_rows<'r>(
    rows: impl Iterator<Item = &'r [u8]>,
    row_len: usize,
    height: usize,
) -> Vec<u8> {
    let mut raw = Vec::with_capacity((row_len + 1) * height);
    for row in rows {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    let compressed = compress_to_vec_zlib(&raw, CompressionLevel::BestCompression as u8);
    log::debug!(
        "deflated {} bytes of scanlines to {}",
        raw.len(),
        compressed.len()
    );
    compressed
}

pub(crate) fn decompress(compressed: &[u8]) -> Result<Vec<u8>, Error> {
    decompress_to_vec_zlib(compressed).map_err(|e| Error::Decompress(format!("{e:?}")))
}

/// Splits inflated image data into scanlines, dropping the filter bytes.
/// Only unfiltered rows are accepted.
pub(crate) fn unfiltered_rows(
    data: &[u8],
    row_len: usize,
    height: usize,
) -> Result<Vec<&[u8]>, Error> {
    let expected = (row_len + 1)
        .checked_mul(height)
        .ok_or_else(|| Error::Malformed("image size overflow".into()))?;
    if data.len() != expected {
        return Err(Error::Malformed(format!(
            "expected {expected} bytes of scanlines, got {}",
            data.len()
        )));
    }
    data.chunks(row_len + 1)
        .map(|line| match line.split_first() {
            Some((&FILTER_NONE, row)) => Ok(row),
            Some((filter, _)) => Err(Error::Unsupported(format!("filter type {filter}"))),
            None => Err(Error::Malformed("empty scanline".into())),
        })
        .collect()
}
