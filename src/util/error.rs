//! Error types for cldraw.

use thiserror::Error;

/// Result alias for cldraw operations.
pub type CldResult<T> = std::result::Result<T, CldError>;

/// Coarse classification of [`CldError`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image or buffers could not be set up.
    Initialization,
    /// A configuration value is out of range.
    Configuration,
    /// A numerically degenerate state was detected.
    Computation,
}

/// Errors that can occur when running the line drawing pipeline.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CldError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer does not hold enough elements.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Two rasters or fields that must share a size do not.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    /// The source image is missing or unusable.
    #[error("initialization failed: {reason}")]
    Initialization { reason: String },
    /// Decoding or encoding through the `image` crate failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
    /// A configuration field holds an invalid value.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// A numeric invariant could not be upheld.
    #[error("degenerate computation: {reason}")]
    Degenerate { reason: &'static str },
}

impl CldError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CldError::InvalidDimensions { .. }
            | CldError::InvalidStride { .. }
            | CldError::BufferTooSmall { .. }
            | CldError::DimensionMismatch { .. }
            | CldError::Initialization { .. }
            | CldError::ImageIo { .. } => ErrorKind::Initialization,
            CldError::InvalidConfig { .. } => ErrorKind::Configuration,
            CldError::Degenerate { .. } => ErrorKind::Computation,
        }
    }
}
