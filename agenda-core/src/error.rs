//! Error types for the agenda client.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Server reported an error: {0}")]
    Api(String),

    #[error("No event is bound to this session")]
    NoBoundEvent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Local form validation failures. These are raised before any network
/// call is made; the editing session stays open so the user can fix the
/// field and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title required")]
    TitleRequired,

    #[error("date required")]
    DateRequired,

    #[error("invalid date: {0}")]
    DateInvalid(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
