//! Shared mock repository for handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::memory::InMemorySessionRepository;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// Wraps the in-memory store, with switches to simulate store failures.
#[derive(Default)]
pub struct MockSessionRepository {
    inner: InMemorySessionRepository,
    pub fail_reads: bool,
    pub fail_writes: bool,
    writes: AtomicUsize,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Seeds a session directly, bypassing failure switches and counters.
    pub async fn seed(&self, session: &Session) {
        self.inner.save(session).await.unwrap();
    }

    pub async fn stored(&self, id: &SessionId) -> Option<Session> {
        self.inner.find_by_id(id).await.unwrap()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated write failure",
            ));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn check_read(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated read failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.check_write()?;
        self.inner.save(session).await
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        self.check_write()?;
        self.inner.update(session).await
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        self.check_read()?;
        self.inner.find_by_id(id).await
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError> {
        self.check_read()?;
        self.inner.find_by_user_id(user_id).await
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.check_write()?;
        self.inner.delete(id).await
    }
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-123").unwrap()
}
