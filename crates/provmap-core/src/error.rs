//! Error types for provmap-core

use thiserror::Error;

/// provmap-core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("pixel buffer holds {len} pixels but dimensions are {width}x{height}")]
    PixelCountMismatch { width: u32, height: u32, len: usize },

    /// Point outside the image
    #[error("point ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
