use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while summarising heart-rate data.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Valid JSON, but not an array of measurement objects, or a required
    /// field is missing.
    #[error("Malformed input {}: {reason}", record_position(.index))]
    MalformedInput {
        index: Option<usize>,
        reason: String,
    },

    /// A field is present but has the wrong type or shape.
    #[error("Invalid measurement at record {index}: {reason}")]
    InvalidMeasurement { index: usize, reason: String },

    /// The summaries could not be encoded as JSON.
    #[error("Failed to serialize summaries: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SummaryError {
    pub fn malformed(index: Option<usize>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            index,
            reason: reason.into(),
        }
    }
}

fn record_position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("at record {}", i),
        None => "at document root".to_string(),
    }
}

/// Convenience alias used throughout the summary crates.
pub type Result<T> = std::result::Result<T, SummaryError>;
