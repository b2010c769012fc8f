//! Error type shared by the library and the binary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input table does not resolve to a readable file.
    #[error("File Not Found: {0}")]
    MissingInputFile(String),

    /// Similarity scoring received lists of different length.
    #[error("Mismatch in the number of vectors: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entity extraction failed: {0}")]
    Extraction(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
