//! Session repository port.
//!
//! Defines the contract for persisting and retrieving Session aggregates.
//! Implementations handle the actual storage operations.
//!
//! # Concurrency
//!
//! Load-mutate-update cycles are not versioned: two writers updating the
//! same session concurrently resolve as last-write-wins.

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Repository port for Session aggregate persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the id is already stored, or on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Persist the current state of an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// - `UnknownStatus` if the stored status is not a known name
    /// - `DatabaseError` on persistence failure
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Find all sessions owned by a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
