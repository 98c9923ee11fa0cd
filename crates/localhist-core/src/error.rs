//! Error types for localhist-core
//!
//! Provides a unified error type for buffer construction and checked
//! pixel access. The histogram hot path never produces these; it relies
//! on callers having validated surfaces and regions up front.

use thiserror::Error;

/// localhist-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the surface dimensions
    #[error("pixel data length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Surface dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for localhist-core operations
pub type Result<T> = std::result::Result<T, Error>;
