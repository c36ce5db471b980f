//! Error types for civic-sla.

use thiserror::Error;

/// Result type alias for civic-sla operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in civic-sla operations.
#[derive(Error, Debug)]
pub enum Error {
    // Lookup errors
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Reward not found: {0}")]
    RewardNotFound(String),

    // Workflow errors
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Insufficient points: needed {needed}, available {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::IssueNotFound(_)
                | Error::WorkerNotFound(_)
                | Error::UserNotFound(_)
                | Error::RewardNotFound(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
