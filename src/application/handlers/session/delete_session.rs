//! DeleteSessionHandler - Store-level removal of a session.
//!
//! Deletion bypasses the lifecycle; any status may be deleted.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        self.repository.delete(&cmd.session_id).await?;
        tracing::info!(session_id = %cmd.session_id, "session deleted");
        Ok(())
    }
}
