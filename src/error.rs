//! Error types for the gesture remote library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Landmark data from the pose model does not satisfy the frame contract
    #[error("Invalid landmarks: {0}")]
    InvalidLandmarks(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),

    /// Landmark trace file could not be parsed
    #[error("Trace format error: {0}")]
    TraceFormat(String),

    /// Sending a gesture to the remote device failed
    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
