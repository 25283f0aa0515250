//! Error types for the indirection demo

use thiserror::Error;

/// Main error type for indirection operations
#[derive(Error, Debug)]
pub enum IndirectionError {
    /// Writing the locations line failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for indirection operations
pub type Result<T> = std::result::Result<T, IndirectionError>;
