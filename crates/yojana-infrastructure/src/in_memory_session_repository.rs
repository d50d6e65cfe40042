//! In-memory session repository.
//!
//! The default storage backend: a process-local map behind an async
//! `RwLock`. Sessions live until explicitly deleted; there is no automatic
//! expiry (an eviction policy would be layered on top by the caller).

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use yojana_core::error::{Result, YojanaError};
use yojana_core::session::{Session, SessionRepository};

/// `HashMap`-backed [`SessionRepository`] implementation.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(session_id) {
            Some(_) => {
                tracing::debug!(session_id, "deleted session");
                Ok(())
            }
            None => Err(YojanaError::not_found("session", session_id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let repo = InMemorySessionRepository::new();
        let mut session = Session::new("s-1");
        session.push_user("hello");
        repo.save(&session).await.unwrap();

        let found = repo.find_by_id("s-1").await.unwrap().unwrap();
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemorySessionRepository::new();
        let mut session = Session::new("s-1");
        repo.save(&session).await.unwrap();

        session.push_user("second save");
        repo.save(&session).await.unwrap();

        let found = repo.find_by_id("s-1").await.unwrap().unwrap();
        assert_eq!(found.messages.len(), 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_session_is_not_found() {
        let repo = InMemorySessionRepository::new();
        let err = repo.delete("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_session() {
        let repo = InMemorySessionRepository::new();
        repo.save(&Session::new("s-1")).await.unwrap();
        repo.delete("s-1").await.unwrap();
        assert!(repo.find_by_id("s-1").await.unwrap().is_none());
    }
}
