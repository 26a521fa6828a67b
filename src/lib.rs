//! Interview Practice - session lifecycle service for mock interviews.
//!
//! A practice session moves through `Started -> InProgress -> Completed`
//! (or `Cancelled`), and only the `Completed` state carries a score,
//! summary, and improvement tips.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
