//! StartInterviewHandler - Command handler for beginning an interview.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to move a session from `Started` to `InProgress`.
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    pub session_id: SessionId,
}

/// Handler for beginning interviews.
pub struct StartInterviewHandler {
    repository: Arc<dyn SessionRepository>,
}

impl StartInterviewHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: StartInterviewCommand) -> Result<Session, SessionError> {
        self.run(cmd.session_id)
            .await
            .map_err(|e| {
                super::log_rejection("start", cmd.session_id, &e);
                e
            })
    }

    async fn run(&self, session_id: SessionId) -> Result<Session, SessionError> {
        let mut session = super::load_session(self.repository.as_ref(), session_id).await?;

        session.start()?;
        self.repository.update(&session).await?;

        tracing::info!(%session_id, status = %session.status(), "interview started");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_user_id, MockSessionRepository};
    use super::*;
    use crate::domain::foundation::SessionStatus;

    #[tokio::test]
    async fn starts_a_started_session() {
        let repo = Arc::new(MockSessionRepository::new());
        let session = Session::new(test_user_id());
        repo.seed(&session).await;
        let handler = StartInterviewHandler::new(repo.clone());

        let updated = handler
            .handle(StartInterviewCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), SessionStatus::InProgress);
        let stored = repo.stored(session.id()).await.unwrap();
        assert_eq!(stored.status(), SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn starting_twice_is_rejected_without_writing() {
        let repo = Arc::new(MockSessionRepository::new());
        let mut session = Session::new(test_user_id());
        session.start().unwrap();
        repo.seed(&session).await;
        let handler = StartInterviewHandler::new(repo.clone());

        let result = handler
            .handle(StartInterviewCommand {
                session_id: *session.id(),
            })
            .await;

        match result {
            Err(SessionError::InvalidTransition { from, to, .. }) => {
                assert_eq!(from, Some(SessionStatus::InProgress));
                assert_eq!(to, Some(SessionStatus::InProgress));
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = StartInterviewHandler::new(Arc::new(MockSessionRepository::new()));
        let session_id = SessionId::new();

        let result = handler.handle(StartInterviewCommand { session_id }).await;

        assert_eq!(result, Err(SessionError::NotFound(session_id)));
    }

    #[tokio::test]
    async fn update_failure_is_reported_as_infrastructure() {
        let repo = Arc::new(MockSessionRepository::failing_writes());
        let session = Session::new(test_user_id());
        repo.seed(&session).await;
        let handler = StartInterviewHandler::new(repo.clone());

        let result = handler
            .handle(StartInterviewCommand {
                session_id: *session.id(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
        let stored = repo.stored(session.id()).await.unwrap();
        assert_eq!(stored.status(), SessionStatus::Started);
    }
}
