//! Error types for the session layer.

use thiserror::Error;

use insomnia_mechanics::MechanicsError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a sheet session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying roll was invalid (empty pools, malformed input).
    #[error(transparent)]
    Mechanics(#[from] MechanicsError),

    /// An answer could not be understood.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
}
