//! ListUserSessionsHandler - Query handler for a user's practice history.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Query to list sessions owned by a user.
#[derive(Debug, Clone)]
pub struct ListUserSessionsQuery {
    pub user_id: UserId,
}

/// Handler for listing a user's sessions, newest first.
pub struct ListUserSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListUserSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListUserSessionsQuery) -> Result<Vec<Session>, SessionError> {
        Ok(self.repository.find_by_user_id(&query.user_id).await?)
    }
}
