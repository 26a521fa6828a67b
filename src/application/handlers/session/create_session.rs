//! CreateSessionHandler - Command handler for starting new practice sessions.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub user_id: UserId,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, SessionError> {
        let session = Session::new(cmd.user_id);

        self.repository.save(&session).await.map_err(|e| {
            tracing::error!(session_id = %session.id(), error = %e, "failed to save new session");
            SessionError::from(e)
        })?;

        tracing::info!(
            session_id = %session.id(),
            user_id = %session.user_id(),
            "session created"
        );

        Ok(session)
    }
}
