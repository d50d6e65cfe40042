//! Application layer: the chat service that orchestrates sessions and the
//! dialogue engine.
//!
//! # Module Structure
//!
//! - `chat_service`: per-session query handling over a `SessionRepository`

mod chat_service;

// Re-export public API
pub use chat_service::{ChatService, QueryOutcome};
