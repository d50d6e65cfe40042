//! Domain layer of the Yojana assistant: the conversational query-resolution
//! engine for government welfare schemes.
//!
//! The crate is organized leaf-first:
//!
//! - [`lexical`]: keyword extraction and fuzzy string similarity
//! - [`detect`]: state, domain, and intent detectors
//! - [`ranker`]: query scoring against the scheme catalog
//! - [`dialogue`]: the per-session dialogue state machine
//! - [`compose`]: response text rendering
//! - [`catalog`]: the immutable scheme dataset
//! - [`session`]: per-conversation state and the persistence trait
//!
//! Transport, storage backends, and the catalog dataset itself live in the
//! surrounding crates; this one is pure logic.

pub mod catalog;
pub mod compose;
pub mod detect;
pub mod dialogue;
pub mod error;
pub mod lexical;
pub mod ranker;
pub mod session;

// Re-export common error type
pub use error::YojanaError;
