//! Session aggregate entity.
//!
//! A session tracks one interview practice attempt from creation through
//! scoring. Every status change goes through the transition table on
//! [`SessionStatus`]; there is no way to set the status directly.

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionStatus, StateMachine, Timestamp, UserId,
};

/// Result recorded when an interview is completed.
///
/// Held as a single optional value on the session so that score, summary,
/// tips and finish time are always present or absent together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: i32,
    pub summary: String,
    pub tips: String,
    pub finished_at: Timestamp,
}

/// Session aggregate - one interview practice attempt.
///
/// # Invariants
///
/// - `id` and `user_id` never change after construction
/// - `status` only moves along edges of the transition table
/// - `outcome` is `Some` if and only if `status` is `Completed`
/// - New sessions start in `Started`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// User practicing the interview.
    user_id: UserId,

    /// Current lifecycle status.
    status: SessionStatus,

    /// When the session was created.
    created_at: Timestamp,

    /// Score and feedback, set on completion.
    outcome: Option<SessionOutcome>,
}

impl Session {
    /// Create a new session in `Started` status.
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            status: SessionStatus::Started,
            created_at: Timestamp::now(),
            outcome: None,
        }
    }

    /// Reconstitute a session from persistence.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the outcome is present without `Completed`
    ///   status, or missing with it
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        status: SessionStatus,
        created_at: Timestamp,
        outcome: Option<SessionOutcome>,
    ) -> Result<Self, DomainError> {
        if (status == SessionStatus::Completed) != outcome.is_some() {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!(
                    "Stored session {} has status {} but {} outcome",
                    id,
                    status,
                    if outcome.is_some() { "an" } else { "no" }
                ),
            )
            .with_detail("session_id", id.to_string())
            .with_detail("status", status.as_str()));
        }

        Ok(Self {
            id,
            user_id,
            status,
            created_at,
            outcome,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the recorded outcome, if completed.
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn finished_at(&self) -> Option<&Timestamp> {
        self.outcome.as_ref().map(|o| &o.finished_at)
    }

    pub fn score(&self) -> Option<i32> {
        self.outcome.as_ref().map(|o| o.score)
    }

    pub fn summary(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.summary.as_str())
    }

    pub fn tips(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.tips.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin the interview.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is `Started`
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.status = self.ensure_can_transition(SessionStatus::InProgress)?;
        Ok(())
    }

    /// Finish the interview and record its score and feedback.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is `InProgress`
    pub fn complete(
        &mut self,
        score: i32,
        summary: impl Into<String>,
        tips: impl Into<String>,
    ) -> Result<(), DomainError> {
        let status = self.ensure_can_transition(SessionStatus::Completed)?;

        self.outcome = Some(SessionOutcome {
            score,
            summary: summary.into(),
            tips: tips.into(),
            finished_at: Timestamp::now(),
        });
        self.status = status;
        Ok(())
    }

    /// Abandon the interview. No outcome is recorded.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is already terminal
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.status = self.ensure_can_transition(SessionStatus::Cancelled)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the transition table without mutating anything.
    fn ensure_can_transition(&self, target: SessionStatus) -> Result<SessionStatus, DomainError> {
        self.status.transition_to(target)
    }
}
