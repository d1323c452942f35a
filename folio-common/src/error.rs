//! Common error types for Folio

use thiserror::Error;

/// Common result type for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Folio pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted document could not be read or decoded
    #[error("Document error: {0}")]
    Document(String),

    /// Output document could not be written
    #[error("Write error for {output}: {source}")]
    Write {
        /// Name of the output document that failed
        output: String,
        #[source]
        source: std::io::Error,
    },
}
