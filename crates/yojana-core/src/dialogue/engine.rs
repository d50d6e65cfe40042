//! The per-session dialogue state machine.
//!
//! One turn = one call to [`DialogueEngine::take_turn`]. The engine combines
//! the attribute detectors, the ranker, and the session's conversational
//! memory to pick a response branch, mutates the session accordingly, and
//! returns the composed response text. Branches are evaluated in a fixed
//! precedence order; the first matching rule fires.

use super::topic::{
    FollowUpTopic, detect_topic, is_implicit_follow_up, mentions_follow_up_keyword,
};
use crate::catalog::{SchemeCatalog, SchemeRecord};
use crate::compose;
use crate::detect::{detect_domain, detect_intent, detect_state};
use crate::error::{Result, YojanaError};
use crate::ranker::find_schemes;
use crate::session::{Session, TurnKind};
use std::sync::Arc;

/// The outcome of a single dialogue turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The composed response text.
    pub response: String,
    /// The scheme records this turn was about: the ranked list for a fresh
    /// search, the single scheme for a selection or follow-up, empty for
    /// greeting/thanks/no-match branches.
    pub matched: Vec<SchemeRecord>,
}

impl TurnOutcome {
    fn text_only(response: String) -> Self {
        Self {
            response,
            matched: Vec::new(),
        }
    }

    fn single(response: String, scheme: &SchemeRecord) -> Self {
        Self {
            response,
            matched: vec![scheme.clone()],
        }
    }
}

/// Drives one conversation turn against the shared catalog.
///
/// The engine itself is stateless and cheap to share; all conversational
/// memory lives in the [`Session`] passed into each turn.
pub struct DialogueEngine {
    catalog: Arc<SchemeCatalog>,
}

impl DialogueEngine {
    pub fn new(catalog: Arc<SchemeCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine answers from.
    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    /// Processes one user query against the session, mutating its
    /// conversational memory and returning the response.
    ///
    /// The caller owns the message log: appending the user query and the
    /// returned response to `session.messages` happens outside this method.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error only if session state references a scheme
    /// name that no longer resolves against the catalog, which indicates a
    /// corrupted session or a mismatched catalog.
    pub fn take_turn(&self, session: &mut Session, query: &str) -> Result<TurnOutcome> {
        let intent = detect_intent(query);

        // Rule 1: greeting resets the conversational focus.
        if intent == crate::detect::Intent::Greeting {
            session.active_scheme = None;
            session.last_turn_kind = TurnKind::None;
            return Ok(TurnOutcome::text_only(compose::greeting()));
        }

        // Rule 2: thanks leaves all state untouched.
        if intent == crate::detect::Intent::Thanks {
            return Ok(TurnOutcome::text_only(compose::thanks()));
        }

        // Rule 3: follow-up on the scheme currently in focus.
        if let Some(name) = session.active_scheme.clone() {
            if mentions_follow_up_keyword(query) || is_implicit_follow_up(query) {
                let scheme = self.resolve(&name)?;
                session.last_turn_kind = TurnKind::SpecificInfo;
                let response = match detect_topic(query) {
                    Some(topic) => compose::attribute(scheme, topic),
                    // No recognizable topic: re-show the overview and menu.
                    None => compose::overview(scheme),
                };
                return Ok(TurnOutcome::single(response, scheme));
            }
        }

        // Rule 4: direct "scheme name + attribute" query without prior focus.
        if session.active_scheme.is_none() {
            if let Some(topic) = FollowUpTopic::from_intent(intent) {
                if let Some(scheme) = self.find_by_name_word(query) {
                    session.active_scheme = Some(scheme.name.clone());
                    session.last_shown_list = vec![scheme.name.clone()];
                    session.last_turn_kind = TurnKind::SpecificInfo;
                    return Ok(TurnOutcome::single(compose::attribute(scheme, topic), scheme));
                }
            }
        }

        // Rule 5: selection from the most recently shown list.
        if session.last_turn_kind == TurnKind::List && !session.last_shown_list.is_empty() {
            let trimmed = query.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
                return self.select_by_index(session, trimmed);
            }
            if let Some(name) = self.match_listed_name(session, query) {
                let scheme = self.resolve(&name)?;
                session.active_scheme = Some(name);
                session.last_turn_kind = TurnKind::SchemeDetail;
                return Ok(TurnOutcome::single(compose::overview(scheme), scheme));
            }
        }

        // Rule 6: fresh ranked results.
        let state = detect_state(query);
        let domain = detect_domain(query);
        let results = find_schemes(&self.catalog, query, state, domain);
        if !results.is_empty() {
            session.last_shown_list = results.iter().map(|s| s.name.clone()).collect();
            session.last_turn_kind = TurnKind::List;
            session.active_scheme = None;
            let response = compose::scheme_list(&results);
            let matched = results.into_iter().cloned().collect();
            return Ok(TurnOutcome { response, matched });
        }

        // Rule 7: nothing matched; guide the user, state unchanged.
        Ok(TurnOutcome::text_only(compose::no_match()))
    }

    /// 1-based numeric selection from the last shown list. Out-of-range (or
    /// unparseable) numbers prompt for a valid range and leave state as-is.
    fn select_by_index(&self, session: &mut Session, digits: &str) -> Result<TurnOutcome> {
        let list_len = session.last_shown_list.len();
        match digits.parse::<usize>() {
            Ok(n) if (1..=list_len).contains(&n) => {
                let name = session.last_shown_list[n - 1].clone();
                let scheme = self.resolve(&name)?;
                session.active_scheme = Some(name);
                session.last_turn_kind = TurnKind::SchemeDetail;
                Ok(TurnOutcome::single(compose::selected(scheme), scheme))
            }
            _ => Ok(TurnOutcome::text_only(compose::out_of_range(list_len))),
        }
    }

    /// First listed scheme whose name contains a query word longer than 4
    /// characters.
    fn match_listed_name(&self, session: &Session, query: &str) -> Option<String> {
        let words = name_match_words(query);
        session
            .last_shown_list
            .iter()
            .find(|name| {
                let name = name.to_lowercase();
                words.iter().any(|w| name.contains(w.as_str()))
            })
            .cloned()
    }

    /// First catalog record whose name contains a query word longer than 4
    /// characters.
    fn find_by_name_word(&self, query: &str) -> Option<&SchemeRecord> {
        let words = name_match_words(query);
        self.catalog.schemes().iter().find(|scheme| {
            let name = scheme.name.to_lowercase();
            words.iter().any(|w| name.contains(w.as_str()))
        })
    }

    /// Resolves a stored scheme name back to its catalog record.
    fn resolve(&self, name: &str) -> Result<&SchemeRecord> {
        self.catalog.get(name).ok_or_else(|| {
            YojanaError::internal(format!(
                "session references unknown scheme '{name}'; catalog and session state disagree"
            ))
        })
    }
}

/// Lowercased query words long enough to identify a scheme by name.
fn name_match_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 4)
        .map(str::to_string)
        .collect()
}
