//! Session domain module.
//!
//! Handles the interview practice lifecycle: a session is started, the
//! interview begins, and it is either completed with a score and feedback
//! or cancelled.

mod aggregate;
mod errors;

pub use aggregate::{Session, SessionOutcome};
pub use errors::SessionError;
