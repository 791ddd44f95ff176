//! Error handling for dump extraction.
//!
//! Only file-level failures are errors. Per-line anomalies are modelled as
//! [`crate::projector::Rejection`] values and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dump file not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to write output file: {path}")]
    OutputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ExtractError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error for the given path
    pub fn output_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputFailed {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
