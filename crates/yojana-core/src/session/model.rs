//! Session domain model.
//!
//! A session holds the per-conversation memory the dialogue state machine
//! works with: the message log, the scheme currently in focus, the list most
//! recently shown, and what kind of turn the assistant last produced.

use super::message::{ConversationMessage, MessageRole};
use serde::{Deserialize, Serialize};

/// What the previous assistant turn was, used to interpret ambiguous next
/// input (e.g. a bare "2" only selects from a list right after one was shown).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    /// No assistant turn yet, or the conversation was reset.
    #[default]
    None,
    /// A numbered list of schemes was presented.
    List,
    /// A scheme's overview was presented after a selection.
    SchemeDetail,
    /// A specific scheme attribute (eligibility, benefits, ...) was answered.
    SpecificInfo,
}

/// Per-conversation state, identified by an opaque session key.
///
/// Sessions are created lazily on first contact and mutated exclusively by
/// the dialogue state machine after each turn. The message log is
/// append-only. `active_scheme` and `last_shown_list` store scheme *names*,
/// which act as weak references into the immutable catalog (names are unique
/// there); they are resolved back to records on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session key.
    pub id: String,
    /// Ordered message log; grows monotonically.
    pub messages: Vec<ConversationMessage>,
    /// Name of the scheme currently in conversational focus, if any.
    pub active_scheme: Option<String>,
    /// Names of the schemes most recently presented to the user, in shown order.
    #[serde(default)]
    pub last_shown_list: Vec<String>,
    /// What the previous assistant turn was.
    #[serde(default)]
    pub last_turn_kind: TurnKind,
    /// Timestamp when the session was created (ISO 8601 format).
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format).
    pub updated_at: String,
}

impl Session {
    /// Creates an empty session under the given key.
    pub fn new(id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: id.into(),
            messages: Vec::new(),
            active_scheme: None,
            last_shown_list: Vec::new(),
            last_turn_kind: TurnKind::None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Appends a user message stamped with the current time.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ConversationMessage::now(MessageRole::User, content));
    }

    /// Appends an assistant message stamped with the current time.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ConversationMessage::now(MessageRole::Assistant, content));
    }

    fn push(&mut self, message: ConversationMessage) {
        self.updated_at = message.timestamp.clone();
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_blank() {
        let session = Session::new("s-1");
        assert!(session.messages.is_empty());
        assert!(session.active_scheme.is_none());
        assert!(session.last_shown_list.is_empty());
        assert_eq!(session.last_turn_kind, TurnKind::None);
    }

    #[test]
    fn test_message_log_appends_in_order() {
        let mut session = Session::new("s-1");
        session.push_user("hello");
        session.push_assistant("hi there");

        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, MessageRole::User);
        assert_eq!(session.messages[1].role, MessageRole::Assistant);
        assert_eq!(session.updated_at, session.messages[1].timestamp);
    }
}
