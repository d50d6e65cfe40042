//! The chat use case: one entry point per user query.
//!
//! `ChatService` wires the detectors, ranker, and dialogue engine together
//! with the injected session store. It owns the concurrency contract from
//! the design: requests for different session keys proceed independently,
//! while requests for the same key are serialized through a per-session
//! lock, so the message log and conversational memory always reflect one
//! linear history.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;
use yojana_core::catalog::{SchemeCatalog, SchemeRecord};
use yojana_core::detect::{detect_domain, detect_intent, detect_state};
use yojana_core::dialogue::DialogueEngine;
use yojana_core::error::Result;
use yojana_core::session::{Session, SessionRepository};

/// The observable result of one handled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// The composed response text.
    pub response: String,
    /// The scheme records this turn was about (possibly empty).
    pub schemes: Vec<SchemeRecord>,
    /// The session key the turn was recorded under; generated when the
    /// caller supplied none.
    pub session_id: String,
}

/// Conversational service answering scheme queries per session.
pub struct ChatService {
    engine: DialogueEngine,
    sessions: Arc<dyn SessionRepository>,
    /// One lock per session key; guards the read-modify-write of a turn.
    turn_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ChatService {
    /// Creates a service over the given catalog and session store.
    pub fn new(catalog: Arc<SchemeCatalog>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            engine: DialogueEngine::new(catalog),
            sessions,
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Convenience constructor: embedded catalog, in-memory session store.
    pub fn in_memory() -> Result<Self> {
        let catalog = yojana_infrastructure::load_builtin_catalog()?;
        let sessions = Arc::new(yojana_infrastructure::InMemorySessionRepository::new());
        Ok(Self::new(Arc::new(catalog), sessions))
    }

    /// The catalog this service answers from.
    pub fn catalog(&self) -> &SchemeCatalog {
        self.engine.catalog()
    }

    /// Handles one user query within a session.
    ///
    /// The session is created lazily if the key is unknown; a fresh key is
    /// generated when `session_id` is `None`. The query is assumed to be
    /// trimmed and non-empty (input validation is the transport layer's
    /// concern).
    ///
    /// # Errors
    ///
    /// Propagates store failures and internal faults from the dialogue
    /// engine; no error originates from user input itself.
    pub async fn handle_query(
        &self,
        session_id: Option<&str>,
        query: &str,
    ) -> Result<QueryOutcome> {
        let id = match session_id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };

        let lock = self.turn_lock(&id).await;
        let _guard = lock.lock().await;

        let mut session = self
            .sessions
            .find_by_id(&id)
            .await?
            .unwrap_or_else(|| Session::new(id.clone()));

        tracing::info!(
            session_id = %id,
            state = ?detect_state(query),
            domain = ?detect_domain(query),
            intent = ?detect_intent(query),
            "handling query"
        );

        session.push_user(query);
        let outcome = self.engine.take_turn(&mut session, query)?;
        session.push_assistant(&outcome.response);
        self.sessions.save(&session).await?;

        Ok(QueryOutcome {
            response: outcome.response,
            schemes: outcome.matched,
            session_id: id,
        })
    }

    /// Deletes a session and its conversational memory.
    ///
    /// Waits for any in-flight turn on the session before deleting. The
    /// lock-map entry is kept: removing it would let a turn still holding
    /// the old lock run unserialized against a recreated session.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if the key is unknown.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let lock = self.turn_lock(session_id).await;
        let _guard = lock.lock().await;
        self.sessions.delete(session_id).await
    }

    /// Number of sessions currently held by the store.
    pub async fn session_count(&self) -> Result<usize> {
        Ok(self.sessions.list_all().await?.len())
    }

    async fn turn_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.turn_locks.lock().await;
        locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yojana_core::session::TurnKind;

    fn service() -> ChatService {
        ChatService::in_memory().unwrap()
    }

    async fn session_state(service: &ChatService, id: &str) -> Session {
        service.sessions.find_by_id(id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_scenario_state_and_domain_query_lists_matches() {
        let service = service();

        let outcome = service
            .handle_query(Some("s-1"), "Health schemes in Tamil Nadu")
            .await
            .unwrap();

        assert!(outcome.response.starts_with("I found"));
        assert!(!outcome.schemes.is_empty());
        assert!(
            outcome
                .schemes
                .iter()
                .all(|s| s.state == "Tamil Nadu" && s.domain == "Health")
        );
        assert!(
            outcome
                .schemes
                .iter()
                .any(|s| s.name.contains("CMCHIS"))
        );

        let session = session_state(&service, "s-1").await;
        assert_eq!(session.last_turn_kind, TurnKind::List);
        let shown: Vec<String> = outcome.schemes.iter().map(|s| s.name.clone()).collect();
        assert_eq!(session.last_shown_list, shown);
    }

    #[tokio::test]
    async fn test_scenario_numeric_selection_then_eligibility() {
        let service = service();

        let listed = service
            .handle_query(Some("s-1"), "Health schemes in Tamil Nadu")
            .await
            .unwrap();
        let first = listed.schemes[0].clone();

        let selected = service.handle_query(Some("s-1"), "1").await.unwrap();
        assert!(selected.response.contains(&first.name));
        assert!(selected.response.contains("What would you like to know"));
        let session = session_state(&service, "s-1").await;
        assert_eq!(session.active_scheme.as_deref(), Some(first.name.as_str()));

        let eligibility = service
            .handle_query(Some("s-1"), "eligibility")
            .await
            .unwrap();
        assert_eq!(
            eligibility.response,
            format!("Eligibility for {}:\n\n{}", first.name, first.eligibility)
        );
    }

    #[tokio::test]
    async fn test_scenario_direct_scheme_documents_query() {
        let service = service();

        let outcome = service
            .handle_query(Some("s-1"), "CMCHIS documents")
            .await
            .unwrap();

        let cmchis = service
            .catalog()
            .get("Chief Minister's Comprehensive Health Insurance Scheme (CMCHIS)")
            .unwrap()
            .clone();
        assert_eq!(
            outcome.response,
            format!(
                "Required documents for {}:\n\n{}",
                cmchis.name, cmchis.required_documents
            )
        );

        let session = session_state(&service, "s-1").await;
        assert_eq!(session.active_scheme.as_deref(), Some(cmchis.name.as_str()));
    }

    #[tokio::test]
    async fn test_scenario_greeting_resets_prior_state() {
        let service = service();

        service
            .handle_query(Some("s-1"), "CMCHIS documents")
            .await
            .unwrap();
        let outcome = service.handle_query(Some("s-1"), "hello").await.unwrap();

        assert!(outcome.response.starts_with("Hello!"));
        let session = session_state(&service, "s-1").await;
        assert!(session.active_scheme.is_none());
        assert_eq!(session.last_turn_kind, TurnKind::None);
    }

    #[tokio::test]
    async fn test_scenario_unmatched_query_yields_guidance() {
        let service = service();

        let outcome = service
            .handle_query(Some("s-1"), "xyzzy gibberish query")
            .await
            .unwrap();

        assert!(outcome.response.starts_with("I couldn't find any schemes"));
        assert!(outcome.schemes.is_empty());
    }

    #[tokio::test]
    async fn test_generates_session_key_when_absent() {
        let service = service();

        let outcome = service.handle_query(None, "hello").await.unwrap();

        assert!(!outcome.session_id.is_empty());
        let session = session_state(&service, &outcome.session_id).await;
        assert_eq!(session.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_message_log_grows_per_turn() {
        let service = service();

        service.handle_query(Some("s-1"), "hello").await.unwrap();
        service
            .handle_query(Some("s-1"), "schemes in kerala")
            .await
            .unwrap();

        let session = session_state(&service, "s-1").await;
        assert_eq!(session.messages.len(), 4);
        assert_eq!(session.messages[0].content, "hello");
        assert_eq!(session.messages[2].content, "schemes in kerala");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let service = service();

        service
            .handle_query(Some("a"), "Health schemes in Tamil Nadu")
            .await
            .unwrap();
        service.handle_query(Some("b"), "hello").await.unwrap();

        let a = session_state(&service, "a").await;
        let b = session_state(&service, "b").await;
        assert_eq!(a.last_turn_kind, TurnKind::List);
        assert_eq!(b.last_turn_kind, TurnKind::None);
        assert_eq!(service.session_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_waits_for_in_flight_turn() {
        let service = Arc::new(service());
        service.handle_query(Some("s-1"), "hello").await.unwrap();

        // Hold the session's turn lock the way an in-flight turn would.
        let lock = service.turn_lock("s-1").await;
        let guard = lock.lock().await;

        let svc = Arc::clone(&service);
        let deletion = tokio::spawn(async move { svc.delete_session("s-1").await });
        tokio::task::yield_now().await;
        assert!(!deletion.is_finished());

        drop(guard);
        deletion.await.unwrap().unwrap();
        assert_eq!(service.session_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let service = service();

        service.handle_query(Some("s-1"), "hello").await.unwrap();
        service.delete_session("s-1").await.unwrap();
        assert_eq!(service.session_count().await.unwrap(), 0);

        let err = service.delete_session("s-1").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
