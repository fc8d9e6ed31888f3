//! Error types for the triage client

use thiserror::Error;

use crate::client::TransportError;

/// Top-level error type for triage operations.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Failure talking to the prediction endpoint
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for triage operations.
pub type Result<T> = std::result::Result<T, TriageError>;
