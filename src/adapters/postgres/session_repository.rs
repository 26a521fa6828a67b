//! PostgreSQL implementation of SessionRepository.
//!
//! Persists Session aggregates to the `sessions` table. Status is stored by
//! canonical name and parsed back through `SessionStatus::from_str`, so a
//! corrupted value surfaces as `UnknownStatus` instead of a default.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionStatus, Timestamp, UserId,
};
use crate::domain::session::{Session, SessionOutcome};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, status, created_at, finished_at, score, summary, tips
    FROM sessions
"#;

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let outcome = session.outcome();

        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, user_id, status, created_at, finished_at, score, summary, tips
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.user_id().as_str())
        .bind(session.status().as_str())
        .bind(session.created_at().as_datetime())
        .bind(outcome.map(|o| *o.finished_at.as_datetime()))
        .bind(outcome.map(|o| o.score))
        .bind(outcome.map(|o| o.summary.as_str()))
        .bind(outcome.map(|o| o.tips.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let outcome = session.outcome();

        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                status = $2,
                finished_at = $3,
                score = $4,
                summary = $5,
                tips = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.status().as_str())
        .bind(outcome.map(|o| *o.finished_at.as_datetime()))
        .bind(outcome.map(|o| o.score))
        .bind(outcome.map(|o| o.summary.as_str()))
        .bind(outcome.map(|o| o.tips.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::session_not_found(session.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch sessions by user", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::session_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

/// Rebuilds the outcome from its four nullable columns.
///
/// The columns are written together, so a partial set means the row was
/// modified outside this service.
fn outcome_from_columns(
    finished_at: Option<DateTime<Utc>>,
    score: Option<i32>,
    summary: Option<String>,
    tips: Option<String>,
) -> Result<Option<SessionOutcome>, DomainError> {
    match (finished_at, score, summary, tips) {
        (Some(finished_at), Some(score), Some(summary), Some(tips)) => Ok(Some(SessionOutcome {
            score,
            summary,
            tips,
            finished_at: Timestamp::from_datetime(finished_at),
        })),
        (None, None, None, None) => Ok(None),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            "Session outcome columns are partially set",
        )),
    }
}

fn row_to_session(row: PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let status: String = column(&row, "status")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    let outcome = outcome_from_columns(
        column(&row, "finished_at")?,
        column(&row, "score")?,
        column(&row, "summary")?,
        column(&row, "tips")?,
    )?;

    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })?;

    Session::reconstitute(
        SessionId::from_uuid(id),
        user_id,
        status.parse::<SessionStatus>()?,
        Timestamp::from_datetime(created_at),
        outcome,
    )
}
