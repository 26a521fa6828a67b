//! Session use-case error types.
//!
//! Application handlers return `SessionError`; the HTTP adapter maps each
//! variant to a status code.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, SessionStatus};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session was not found.
    #[error("session {0} not found")]
    NotFound(SessionId),

    /// Operation not permitted in the session's current status.
    #[error("{message}")]
    InvalidTransition {
        from: Option<SessionStatus>,
        to: Option<SessionStatus>,
        message: String,
    },

    /// A stored status name was outside the known set.
    #[error("unknown session status: {0}")]
    UnknownStatus(String),

    /// Validation failed.
    #[error("validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Store or other infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SessionError::UnknownStatus(_) => ErrorCode::UnknownStatus,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => SessionError::InvalidTransition {
                from: err.detail("from").and_then(|s| s.parse().ok()),
                to: err.detail("to").and_then(|s| s.parse().ok()),
                message: err.message,
            },
            ErrorCode::UnknownStatus => SessionError::UnknownStatus(
                err.detail("value").unwrap_or_default().to_string(),
            ),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                SessionError::ValidationFailed {
                    field: err.detail("field").unwrap_or("unknown").to_string(),
                    message: err.message,
                }
            }
            ErrorCode::SessionNotFound => match err
                .detail("session_id")
                .and_then(|s| s.parse::<SessionId>().ok())
            {
                Some(id) => SessionError::NotFound(id),
                None => SessionError::Infrastructure(err.to_string()),
            },
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                SessionError::Infrastructure(err.to_string())
            }
        }
    }
}
