use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the cascade tools.
#[derive(Error, Debug)]
pub enum CascadeError {
    /// An input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON-lines record was malformed, lacked a field, or had a field of
    /// the wrong kind. `line` is 1-based.
    #[error("Failed to parse record on line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A benchmark median parsed to zero, a negative value, or a non-finite
    /// value, so no rate can be derived from it.
    #[error("Median duration on line {line} must be positive, got {median}")]
    NonPositiveDuration { line: usize, median: f64 },

    /// The derived retweets-per-second figure is not finite or does not fit
    /// in a signed 64-bit integer.
    #[error("Rate on line {line} is not representable: {rate}")]
    RateOutOfRange { line: usize, rate: f64 },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the cascade crates.
pub type Result<T> = std::result::Result<T, CascadeError>;
