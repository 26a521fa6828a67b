//! CompleteInterviewHandler - Command handler for scoring a finished interview.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to complete an in-progress interview with its outcome.
#[derive(Debug, Clone)]
pub struct CompleteInterviewCommand {
    pub session_id: SessionId,
    pub score: i32,
    pub summary: String,
    pub tips: String,
}

/// Handler for completing interviews.
pub struct CompleteInterviewHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CompleteInterviewHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteInterviewCommand) -> Result<Session, SessionError> {
        let session_id = cmd.session_id;
        self.run(cmd)
            .await
            .map_err(|e| {
                super::log_rejection("complete", session_id, &e);
                e
            })
    }

    async fn run(&self, cmd: CompleteInterviewCommand) -> Result<Session, SessionError> {
        let mut session = super::load_session(self.repository.as_ref(), cmd.session_id).await?;

        session.complete(cmd.score, cmd.summary, cmd.tips)?;
        self.repository.update(&session).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            status = %session.status(),
            score = cmd.score,
            "interview completed"
        );
        Ok(session)
    }
}
