//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `TurnKind`)
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `repository`: Repository trait for session persistence

mod message;
mod model;
mod repository;

// Re-export public API
pub use message::{ConversationMessage, MessageRole};
pub use model::{Session, TurnKind};
pub use repository::SessionRepository;
