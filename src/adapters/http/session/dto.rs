//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::{Session, SessionError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new practice session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub user_id: String,
}

/// Request to complete an interview with its outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteSessionRequest {
    pub score: i32,
    pub summary: String,
    pub tips: String,
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsQuery {
    pub user_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full session representation. Unset outcome fields serialize as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub user_id: String,
    pub status: SessionStatus,
    pub created_at: String,
    pub finished_at: Option<String>,
    pub score: Option<i32>,
    pub summary: Option<String>,
    pub tips: Option<String>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            user_id: session.user_id().to_string(),
            status: session.status(),
            created_at: session.created_at().to_rfc3339(),
            finished_at: session.finished_at().map(|t| t.to_rfc3339()),
            score: session.score(),
            summary: session.summary().map(str::to_string),
            tips: session.tips().map(str::to_string),
        }
    }
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self::from(&session)
    }
}

/// List of a user's sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SessionListResponse {
    pub items: Vec<SessionResponse>,
    pub total: usize,
}

impl From<Vec<Session>> for SessionListResponse {
    fn from(sessions: Vec<Session>) -> Self {
        let items: Vec<SessionResponse> = sessions.iter().map(SessionResponse::from).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "internal server error".to_string(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }

    /// Builds a client-facing error from a session error.
    ///
    /// Only meaningful for client errors; infrastructure failures use
    /// [`ErrorResponse::internal`] so store details never leak.
    pub fn from_session_error(error: &SessionError) -> Self {
        Self {
            error: error.to_string(),
            code: error.code().to_string(),
        }
    }
}
