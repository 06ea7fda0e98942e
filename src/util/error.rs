//! Error types for edgemap.

use thiserror::Error;

/// Result alias for edgemap operations.
pub type EdgeMapResult<T> = std::result::Result<T, EdgeMapError>;

/// Errors surfaced by the edgemap pipeline and its raster collaborators.
///
/// The gradient computation is total over any conforming image plane, so
/// every variant here originates at a contract or I/O boundary. Open
/// failures, format failures, and configuration failures stay
/// distinguishable so the CLI layer can report them separately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdgeMapError {
    /// Width or height is zero, or their product overflows `usize`.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is smaller than the image width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too small for the declared geometry.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An engine configuration parameter is out of its valid range.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(&'static str),
    /// The worker pool could not be constructed.
    #[error("worker pool construction failed: {reason}")]
    WorkerPool { reason: String },
    /// The raster header does not start with the `P5` magic token.
    #[error("unsupported raster format: magic token is not \"P5\"")]
    BadMagic,
    /// The raster header is syntactically invalid.
    #[error("malformed raster header: {0}")]
    MalformedHeader(&'static str),
    /// The pixel payload ends before `width * height` bytes.
    #[error("truncated pixel payload: needed {needed} bytes, got {got}")]
    TruncatedPayload { needed: usize, got: usize },
    /// A source or destination could not be opened, read, or written.
    #[error("i/o failure: {reason}")]
    Io { reason: String },
    /// The `image` crate failed to decode an input raster.
    #[error("image decode failure: {reason}")]
    ImageIo { reason: String },
}

impl From<std::io::Error> for EdgeMapError {
    fn from(err: std::io::Error) -> Self {
        EdgeMapError::Io {
            reason: err.to_string(),
        }
    }
}
