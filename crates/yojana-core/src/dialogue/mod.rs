//! Dialogue state machine module.
//!
//! # Module Structure
//!
//! - `engine`: The per-session state machine (`DialogueEngine`, `TurnOutcome`)
//! - `topic`: Follow-up topic detection for the active scheme

mod engine;
mod topic;

// Re-export public API
pub use engine::{DialogueEngine, TurnOutcome};
pub use topic::{FollowUpTopic, detect_topic, is_implicit_follow_up, mentions_follow_up_keyword};
