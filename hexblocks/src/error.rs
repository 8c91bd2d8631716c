use thiserror::Error;

/// Failure to turn hex text into bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("odd length hex string ({0} digits)")]
    OddLength(usize),

    #[error("invalid byte {digit:#04x} at position {position}")]
    InvalidDigit { digit: u8, position: usize },
}

/// Failure to read blocks back out of an image container.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("decoding PNG: {0}")]
    Raster(#[from] png::DecodingError),

    #[error("color field on line {line} is shorter than 6 hex digits")]
    ShortColor { line: usize },

    #[error("decoding color in SVG on line {line}: {source}")]
    InvalidColor {
        line: usize,
        #[source]
        source: HexError,
    },

    #[error("reading SVG: {0}")]
    Read(#[from] std::io::Error),
}

/// Failure to serialize a rendered canvas.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("canvas of {width}x{height} pixels is too large for PNG")]
    CanvasTooLarge { width: usize, height: usize },

    #[error("encoding PNG: {0}")]
    Raster(#[from] png::EncodingError),

    #[error("writing SVG: {0}")]
    Vector(#[from] std::io::Error),
}

/// Any failure of a whole encode or decode invocation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("reading input: {0}")]
    Read(#[source] std::io::Error),

    #[error("decoding hex: {0}")]
    Format(#[from] HexError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("writing output: {0}")]
    Write(#[source] std::io::Error),
}
