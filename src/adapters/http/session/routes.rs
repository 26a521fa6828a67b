//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_session, complete_session, create_session, delete_session, get_session,
    list_sessions, start_session, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session).get(list_sessions))
        .route("/:id", get(get_session).delete(delete_session))
        .route("/:id/start", post(start_session))
        .route("/:id/complete", post(complete_session))
        .route("/:id/cancel", post(cancel_session))
        .with_state(handlers)
}
