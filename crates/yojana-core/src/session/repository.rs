//! Session repository trait.
//!
//! Defines the interface for session persistence operations, decoupling the
//! dialogue core from the specific storage mechanism (in-memory map, files,
//! a distributed backend, ...). The core only needs get-or-create semantics
//! built from `find_by_id` + `save`, and explicit deletion.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for conversation sessions, keyed by the opaque session id.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>>;

    /// Saves a session, inserting or replacing the stored copy.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Deletes a session.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no session exists under the given ID.
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// Lists all stored sessions.
    async fn list_all(&self) -> Result<Vec<Session>>;
}
