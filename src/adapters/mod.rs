//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - PostgreSQL session store
//! - `memory` - In-memory session store for development and tests
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemorySessionRepository;
pub use postgres::PostgresSessionRepository;
