//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CancelInterviewCommand, CancelInterviewHandler, CompleteInterviewCommand,
    CompleteInterviewHandler, CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand,
    DeleteSessionHandler, GetSessionHandler, GetSessionQuery, ListUserSessionsHandler,
    ListUserSessionsQuery, StartInterviewCommand, StartInterviewHandler,
};
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::dto::{
    CompleteSessionRequest, CreateSessionRequest, ErrorResponse, ListSessionsQuery,
    SessionListResponse, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    start_handler: Arc<StartInterviewHandler>,
    complete_handler: Arc<CompleteInterviewHandler>,
    cancel_handler: Arc<CancelInterviewHandler>,
    list_handler: Arc<ListUserSessionsHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
}

impl SessionHandlers {
    /// Wires every session use case to the same repository.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateSessionHandler::new(repository.clone())),
            get_handler: Arc::new(GetSessionHandler::new(repository.clone())),
            start_handler: Arc::new(StartInterviewHandler::new(repository.clone())),
            complete_handler: Arc::new(CompleteInterviewHandler::new(repository.clone())),
            cancel_handler: Arc::new(CancelInterviewHandler::new(repository.clone())),
            list_handler: Arc::new(ListUserSessionsHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteSessionHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a new practice session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => return handle_session_error(SessionError::validation(e.field(), e.to_string())),
    };

    match handlers
        .create_handler
        .handle(CreateSessionCommand { user_id })
        .await
    {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions?userId= - List a user's sessions
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    query: Result<Query<ListSessionsQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let user_id = match UserId::new(params.user_id) {
        Ok(id) => id,
        Err(e) => return handle_session_error(SessionError::validation(e.field(), e.to_string())),
    };

    match handlers
        .list_handler
        .handle(ListUserSessionsQuery { user_id })
        .await
    {
        Ok(sessions) => (StatusCode::OK, Json(SessionListResponse::from(sessions))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond_with_session(handlers.get_handler.handle(GetSessionQuery { session_id }).await)
}

/// POST /api/sessions/:id/start - Begin the interview
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond_with_session(
        handlers
            .start_handler
            .handle(StartInterviewCommand { session_id })
            .await,
    )
}

/// POST /api/sessions/:id/complete - Score the interview
pub async fn complete_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    body: Result<Json<CompleteSessionRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let cmd = CompleteInterviewCommand {
        session_id,
        score: req.score,
        summary: req.summary,
        tips: req.tips,
    };

    respond_with_session(handlers.complete_handler.handle(cmd).await)
}

/// POST /api/sessions/:id/cancel - Abandon the interview
pub async fn cancel_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond_with_session(
        handlers
            .cancel_handler
            .handle(CancelInterviewCommand { session_id })
            .await,
    )
}

/// DELETE /api/sessions/:id - Remove a session from the store
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>()
        .map_err(|_| bad_request(format!("invalid session id: {}", raw)))
}

fn respond_with_session(result: Result<crate::domain::session::Session, SessionError>) -> Response {
    match result {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    match &error {
        SessionError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::from_session_error(&error)),
        )
            .into_response(),
        SessionError::InvalidTransition { .. } | SessionError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_session_error(&error)),
        )
            .into_response(),
        SessionError::UnknownStatus(_) | SessionError::Infrastructure(_) => {
            tracing::error!(error = %error, "session request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
