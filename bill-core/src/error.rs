//! Error types for statement rendering

use thiserror::Error;

/// Result type alias for fallible statement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the I/O edges of the core.
///
/// Calculation and formatting never fail; only font loading and image
/// encoding can.
#[derive(Error, Debug)]
pub enum Error {
    /// A font file could not be parsed
    #[error("Failed to parse font: {0}")]
    FontParse(String),

    /// The rendered image could not be encoded as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// Reading a font file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
