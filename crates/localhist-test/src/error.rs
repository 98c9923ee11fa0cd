//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test surfaces
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] localhist_core::Error),

    /// Invalid generator parameters
    #[error("invalid generator parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
