//! Session command and query handlers.
//!
//! Each handler runs exactly one use case: load the aggregate (if any),
//! call one aggregate operation, persist, and return the updated session.

mod cancel_interview;
mod complete_interview;
mod create_session;
mod delete_session;
mod get_session;
mod list_user_sessions;
mod start_interview;

#[cfg(test)]
mod test_support;

pub use cancel_interview::{CancelInterviewCommand, CancelInterviewHandler};
pub use complete_interview::{CompleteInterviewCommand, CompleteInterviewHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_user_sessions::{ListUserSessionsHandler, ListUserSessionsQuery};
pub use start_interview::{StartInterviewCommand, StartInterviewHandler};

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Loads a session or fails with `NotFound`.
async fn load_session(
    repository: &dyn SessionRepository,
    session_id: SessionId,
) -> Result<Session, SessionError> {
    repository
        .find_by_id(&session_id)
        .await?
        .ok_or_else(|| SessionError::not_found(session_id))
}

/// Logs a failed lifecycle operation at the level its cause deserves.
fn log_rejection(operation: &'static str, session_id: SessionId, error: &SessionError) {
    match error {
        SessionError::Infrastructure(_) | SessionError::UnknownStatus(_) => {
            tracing::error!(%session_id, operation, error = %error, "session operation failed");
        }
        _ => {
            tracing::warn!(%session_id, operation, error = %error, "session operation rejected");
        }
    }
}
