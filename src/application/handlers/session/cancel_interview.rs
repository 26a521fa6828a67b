//! CancelInterviewHandler - Command handler for abandoning an interview.
//!
//! Cancellation only happens on an explicit client request; nothing in the
//! service cancels sessions on its own.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to cancel a session that has not reached a terminal status.
#[derive(Debug, Clone)]
pub struct CancelInterviewCommand {
    pub session_id: SessionId,
}

/// Handler for cancelling interviews.
pub struct CancelInterviewHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CancelInterviewHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CancelInterviewCommand) -> Result<Session, SessionError> {
        self.run(cmd.session_id)
            .await
            .map_err(|e| {
                super::log_rejection("cancel", cmd.session_id, &e);
                e
            })
    }

    async fn run(&self, session_id: SessionId) -> Result<Session, SessionError> {
        let mut session = super::load_session(self.repository.as_ref(), session_id).await?;

        session.cancel()?;
        self.repository.update(&session).await?;

        tracing::info!(%session_id, status = %session.status(), "interview cancelled");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_user_id, MockSessionRepository};
    use super::*;
    use crate::domain::foundation::SessionStatus;

    #[tokio::test]
    async fn cancels_in_progress_session() {
        let repo = Arc::new(MockSessionRepository::new());
        let mut session = Session::new(test_user_id());
        session.start().unwrap();
        repo.seed(&session).await;
        let handler = CancelInterviewHandler::new(repo.clone());

        let updated = handler
            .handle(CancelInterviewCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), SessionStatus::Cancelled);
        assert!(updated.outcome().is_none());
        let stored = repo.stored(session.id()).await.unwrap();
        assert_eq!(stored.status(), SessionStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancelling_completed_session_is_rejected() {
        let repo = Arc::new(MockSessionRepository::new());
        let mut session = Session::new(test_user_id());
        session.start().unwrap();
        session.complete(60, "ok", "more practice").unwrap();
        repo.seed(&session).await;
        let handler = CancelInterviewHandler::new(repo.clone());

        let result = handler
            .handle(CancelInterviewCommand {
                session_id: *session.id(),
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionError::InvalidTransition {
                from: Some(SessionStatus::Completed),
                to: Some(SessionStatus::Cancelled),
                ..
            })
        ));
        assert_eq!(repo.stored(session.id()).await, Some(session));
    }
}
