use polars::prelude::PolarsError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CascadeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

/// Type alias for Result with CascadeError
pub type Result<T> = std::result::Result<T, CascadeError>;

impl CascadeError {
    /// Create a new InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CascadeError::InvalidInput(message.into())
    }

    /// Create a new DataError
    pub fn data(message: impl Into<String>) -> Self {
        CascadeError::DataError(message.into())
    }

    /// Create a new OutputError
    pub fn output(message: impl Into<String>) -> Self {
        CascadeError::OutputError(message.into())
    }
}
