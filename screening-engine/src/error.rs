//! Error types for the screening engine

use thiserror::Error;

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, Error>;

/// Screening engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid screening input
    #[error("Invalid screening input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Watchlist CSV error
    #[error("Watchlist CSV error: {0}")]
    Csv(#[from] csv::Error),
}
