use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected {expected}, got '{token}'")]
    MalformedToken {
        expected: &'static str,
        token: String,
    },

    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("canvas {width}x{height} exceeds the PNG limit of 2147483647 pixels per side")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("cell size must be at least 1 pixel")]
    ZeroCell,

    #[error("accent cell {col}x{row} out of range for {cols}x{rows} grid")]
    CellOutOfRange {
        col: u32,
        row: u32,
        cols: u32,
        rows: u32,
    },

    #[error("square size {size} out of range for {width}x{height}")]
    SquareOutOfRange { size: u32, width: u32, height: u32 },

    #[error("palette must hold 1 to 3 colors, got {0}")]
    PaletteSize(usize),

    #[error("{chunk_type} payload of {len} bytes exceeds the chunk length limit")]
    ChunkTooLarge { chunk_type: String, len: usize },

    #[error("input doesn't start with the PNG signature")]
    Signature,

    #[error("input ends in the middle of a chunk")]
    Truncated,

    #[error("CRC mismatch in {chunk_type} chunk")]
    ChecksumMismatch { chunk_type: String },

    #[error("unsupported PNG feature: {0}")]
    Unsupported(String),

    #[error("malformed PNG: {0}")]
    Malformed(String),

    #[error("failed to decompress image data: {0}")]
    Decompress(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
