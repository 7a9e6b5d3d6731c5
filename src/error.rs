use thiserror::Error;

/// Errors raised when a pixel buffer does not match its declared shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero, or the buffer size would overflow `usize`.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
    },

    /// The buffer length differs from `width * height * channels`.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Length implied by the dimensions and layout.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// Result type for the edge filter.
pub type Result<T> = std::result::Result<T, Error>;
