//! GetSessionHandler - Query handler for retrieving a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        super::load_session(self.repository.as_ref(), query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{test_user_id, MockSessionRepository};
    use super::*;

    #[tokio::test]
    async fn returns_stored_session() {
        let repo = Arc::new(MockSessionRepository::new());
        let session = Session::new(test_user_id());
        repo.seed(&session).await;
        let handler = GetSessionHandler::new(repo);

        let found = handler
            .handle(GetSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn returns_not_found_when_session_does_not_exist() {
        let handler = GetSessionHandler::new(Arc::new(MockSessionRepository::new()));
        let session_id = SessionId::new();

        let result = handler.handle(GetSessionQuery { session_id }).await;

        assert_eq!(result, Err(SessionError::NotFound(session_id)));
    }

    #[tokio::test]
    async fn read_failure_is_reported_as_infrastructure() {
        let handler = GetSessionHandler::new(Arc::new(MockSessionRepository::failing_reads()));

        let result = handler
            .handle(GetSessionQuery {
                session_id: SessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
    }
}
