//! In-memory adapters for development and tests.

mod session_repository;

pub use session_repository::InMemorySessionRepository;
