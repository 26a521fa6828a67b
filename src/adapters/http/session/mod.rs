//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompleteSessionRequest, CreateSessionRequest, ErrorResponse, ListSessionsQuery,
    SessionListResponse, SessionResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
