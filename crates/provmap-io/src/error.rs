//! I/O error types

use thiserror::Error;

/// I/O error type
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the `BM` signature
    #[error("not a BMP file: bad signature")]
    BadSignature,

    /// The info header is too small to be valid
    #[error("malformed info header: {0} bytes")]
    MalformedHeader(u32),

    /// Only 24-bit maps are supported
    #[error("unsupported bit depth: {0} bpp (province maps are 24 bpp)")]
    UnsupportedBitDepth(u16),

    /// Compressed BMPs are not supported
    #[error("unsupported compression mode: {0}")]
    UnsupportedCompression(u32),

    /// Nonsensical dimensions in the header
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// The pixel data ended early
    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },

    /// Shape data did not start with the expected magic bytes
    #[error("not a shape data file: bad magic")]
    BadMagic,

    /// Shape data version this build cannot read
    #[error("unsupported shape data version: {0}")]
    UnsupportedVersion(u32),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] provmap_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
