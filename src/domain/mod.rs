//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, status, errors)
//! - `session` - Interview practice session aggregate and its errors

pub mod foundation;
pub mod session;
