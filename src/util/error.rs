//! Error types for graymap.

use thiserror::Error;

/// Result alias for graymap operations.
pub type GrayMapResult<T> = std::result::Result<T, GrayMapError>;

/// Recoverable failures.
///
/// Out-of-range coordinates and rectangles are caller bugs and panic instead;
/// they never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrayMapError {
    /// Backing storage for `len` elements could not be obtained.
    #[error("allocation of {len} elements failed")]
    Allocation { len: usize },
    /// Dimensions overflow or disagree with the supplied sample count.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Decoded maxval is outside `1..=255`.
    #[error("invalid maxval {maxval}")]
    InvalidMaxval { maxval: u32 },
    /// Malformed PGM stream.
    #[error("pgm: {reason}")]
    Pgm { reason: &'static str },
    /// Underlying file or stream failure.
    #[error("io: {reason}")]
    Io { reason: String },
    /// Failure reported by the `image` crate bridge.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}

impl From<std::io::Error> for GrayMapError {
    fn from(err: std::io::Error) -> Self {
        GrayMapError::Io {
            reason: err.to_string(),
        }
    }
}
