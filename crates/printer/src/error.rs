//! Error types for the printer

use thiserror::Error;

/// Main error type for printer operations
#[derive(Error, Debug)]
pub enum PrinterError {
    /// Writing a line to the output sink failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for printer operations
pub type Result<T> = std::result::Result<T, PrinterError>;
