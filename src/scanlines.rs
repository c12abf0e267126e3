use crate::error::Error;

/// Bits per palette index in an indexed-color scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    One = 1,
    Two = 2,
}
impl BitDepth {
    pub(crate) const fn bits(self) -> usize {
        self as usize
    }

    const fn pixels_per_byte(self) -> usize {
        8 / self.bits()
    }

    const fn mask(self) -> u8 {
        (1 << self.bits()) - 1
    }
}
impl TryFrom<u8> for BitDepth {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            d => Err(Error::Unsupported(format!("bit depth {d}"))),
        }
    }
}

/// Bytes needed for `width` pixels, not counting the filter byte.
pub const fn scanline_len(width: usize, depth: BitDepth) -> usize {
    (width * depth.bits()).div_ceil(8)
}

/// Packs palette indices most-significant bits first. Unused low bits of the
/// last byte stay zero.
pub fn pack(indices: &[u8], depth: BitDepth) -> Vec<u8> {
    let per_byte = depth.pixels_per_byte();
    let mut row = vec![0; scanline_len(indices.len(), depth)];
    for (i, index) in indices.iter().enumerate() {
        let shift = 8 - depth.bits() * (i % per_byte + 1);
        row[i / per_byte] |= (index & depth.mask()) << shift;
    }
    row
}

/// Inverse of [`pack`] for the first `width` pixels of `row`.
pub fn unpack(row: &[u8], width: usize, depth: BitDepth) -> Vec<u8> {
    let per_byte = depth.pixels_per_byte();
    (0..width)
        .map_while(|i| {
            let byte = row.get(i / per_byte)?;
            let shift = 8 - depth.bits() * (i % per_byte + 1);
            Some((byte >> shift) & depth.mask())
        })
        .collect()
}
