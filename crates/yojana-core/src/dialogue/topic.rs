//! Follow-up topic detection for a scheme already in focus.

use crate::detect::Intent;

/// A scheme attribute the user can drill into once a scheme is in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpTopic {
    Eligibility,
    Benefits,
    Application,
    Website,
    Documents,
}

/// Keywords per follow-up topic, checked in fixed priority order.
const TOPIC_KEYWORDS: &[(FollowUpTopic, &[&str])] = &[
    (
        FollowUpTopic::Eligibility,
        &["eligibility", "eligible", "qualify", "criteria", "who can"],
    ),
    (
        FollowUpTopic::Benefits,
        &["benefit", "benefits", "what do i get", "advantages"],
    ),
    (
        FollowUpTopic::Application,
        &["apply", "application", "process", "how to", "registration"],
    ),
    (
        FollowUpTopic::Website,
        &["website", "link", "official", "portal", "online"],
    ),
    (
        FollowUpTopic::Documents,
        &["document", "documents", "required", "papers", "proof"],
    ),
];

/// Any of these words marks a query as a follow-up on the active scheme.
const FOLLOW_UP_KEYWORDS: &[&str] = &[
    "eligibility", "benefits", "application", "process", "website", "documents", "qualify",
    "apply", "how to", "required", "link", "portal",
];

impl FollowUpTopic {
    /// Maps an attribute intent to its topic; non-attribute intents map to `None`.
    pub fn from_intent(intent: Intent) -> Option<Self> {
        match intent {
            Intent::Eligibility => Some(Self::Eligibility),
            Intent::Benefits => Some(Self::Benefits),
            Intent::Application => Some(Self::Application),
            Intent::Website => Some(Self::Website),
            Intent::Documents => Some(Self::Documents),
            _ => None,
        }
    }
}

/// Detects which attribute of the active scheme a follow-up query asks about,
/// first matching topic wins.
pub fn detect_topic(query: &str) -> Option<FollowUpTopic> {
    let query = query.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| query.contains(kw)))
        .map(|(topic, _)| *topic)
}

/// Whether the query mentions any attribute keyword at all.
pub fn mentions_follow_up_keyword(query: &str) -> bool {
    let query = query.to_lowercase();
    FOLLOW_UP_KEYWORDS.iter().any(|kw| query.contains(kw))
}

/// The short-query follow-up heuristic: any sufficiently short query is
/// treated as an implicit follow-up on the active scheme, even if it was
/// meant as a new search. Deliberately imprecise; kept behind this named
/// predicate so the threshold can be replaced without touching the state
/// machine.
pub fn is_implicit_follow_up(query: &str) -> bool {
    query.trim().chars().count() < 15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_priority_order() {
        assert_eq!(detect_topic("am i eligible"), Some(FollowUpTopic::Eligibility));
        assert_eq!(detect_topic("what benefits"), Some(FollowUpTopic::Benefits));
        // "required" resolves to documents only when nothing earlier matches.
        assert_eq!(detect_topic("required papers"), Some(FollowUpTopic::Documents));
        // "who can apply": eligibility's "who can" is checked before "apply".
        assert_eq!(detect_topic("who can apply"), Some(FollowUpTopic::Eligibility));
        assert_eq!(detect_topic("something else"), None);
    }

    #[test]
    fn test_follow_up_keyword_detection() {
        assert!(mentions_follow_up_keyword("what is the application process"));
        assert!(mentions_follow_up_keyword("official portal please"));
        assert!(!mentions_follow_up_keyword("something entirely unrelated"));
    }

    #[test]
    fn test_short_queries_are_implicit_follow_ups() {
        assert!(is_implicit_follow_up("tell me more"));
        assert!(is_implicit_follow_up("   benefits?   "));
        assert!(!is_implicit_follow_up("health schemes in tamil nadu"));
    }

    #[test]
    fn test_implicit_follow_up_counts_chars_not_bytes() {
        // "தகுதி?" is 6 characters but 16 UTF-8 bytes.
        assert!(is_implicit_follow_up("தகுதி?"));
        // 11 characters, 29 UTF-8 bytes.
        assert!(is_implicit_follow_up("தகுதி என்ன?"));
    }

    #[test]
    fn test_from_intent_covers_attribute_intents() {
        assert_eq!(
            FollowUpTopic::from_intent(Intent::Documents),
            Some(FollowUpTopic::Documents)
        );
        assert_eq!(FollowUpTopic::from_intent(Intent::Greeting), None);
        assert_eq!(FollowUpTopic::from_intent(Intent::List), None);
    }
}
