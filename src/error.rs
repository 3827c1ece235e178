//! Error types for text metric operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running an evaluation
#[derive(Error, Debug)]
pub enum TextMetricError {
    /// An enumerated argument (e.g. `return_as`) had an unrecognised value
    #[error("Invalid value '{value}'. Expected one of: {expected:?}")]
    InvalidArgument {
        value: String,
        expected: &'static [&'static str],
    },

    /// A numeric parameter was out of range
    #[error("{name} must be {constraint}, got {value}")]
    OutOfRange {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },

    /// Reading a configuration or text file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TextMetricError>;
