//! HTTP adapter - REST API over axum.

mod router;
pub mod session;

pub use router::app_router;
pub use session::SessionHandlers;
