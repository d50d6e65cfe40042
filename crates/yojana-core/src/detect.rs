//! Attribute detectors: state, domain, and intent classification.
//!
//! Each detector scans a lowercased copy of the query for substring hits
//! against a fixed alias table and returns the first matching category in
//! table-declaration order. There is no ranking between candidates: the
//! tables encode an "at most one" contract, captured by the `Option` /
//! total-enum return types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An Indian state covered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    TamilNadu,
    Kerala,
    Karnataka,
    AndhraPradesh,
    Telangana,
    Maharashtra,
    Puducherry,
}

impl State {
    /// The state's name as it appears in catalog records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TamilNadu => "Tamil Nadu",
            Self::Kerala => "Kerala",
            Self::Karnataka => "Karnataka",
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Telangana => "Telangana",
            Self::Maharashtra => "Maharashtra",
            Self::Puducherry => "Puducherry",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A topical scheme domain covered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Health,
    Education,
    WomenWelfare,
    Agriculture,
    Transport,
    SocialWelfare,
    FoodSecurity,
    Electricity,
    Entrepreneurship,
}

impl Domain {
    /// The domain's name as it appears in catalog records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Education => "Education",
            Self::WomenWelfare => "Women Welfare",
            Self::Agriculture => "Agriculture",
            Self::Transport => "Transport",
            Self::SocialWelfare => "Social Welfare",
            Self::FoodSecurity => "Food Security",
            Self::Electricity => "Electricity",
            Self::Entrepreneurship => "Entrepreneurship",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse classification of a query's conversational purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Thanks,
    Eligibility,
    Benefits,
    Application,
    Website,
    Documents,
    List,
    General,
}

/// Aliases and abbreviations per state, in declaration (priority) order.
const STATE_ALIASES: &[(State, &[&str])] = &[
    (State::TamilNadu, &["tamil nadu", "tn", "tamilnadu"]),
    (State::Kerala, &["kerala", "kl"]),
    (State::Karnataka, &["karnataka", "kt", "ka"]),
    (State::AndhraPradesh, &["andhra pradesh", "ap", "andhra"]),
    (State::Telangana, &["telangana", "ts", "tg"]),
    (State::Maharashtra, &["maharashtra", "mh"]),
    (State::Puducherry, &["puducherry", "pondicherry", "py"]),
];

/// Topical keywords per domain, in declaration (priority) order.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Health,
        &["health", "medical", "hospital", "insurance", "treatment", "healthcare", "medicine"],
    ),
    (
        Domain::Education,
        &["education", "scholarship", "student", "school", "college", "study", "academic"],
    ),
    (
        Domain::WomenWelfare,
        &["women", "woman", "girl", "female", "mother", "ladies"],
    ),
    (
        Domain::Agriculture,
        &["agriculture", "farming", "farmer", "crop", "land", "agricultural"],
    ),
    (
        Domain::Transport,
        &["transport", "bus", "travel", "free travel", "transportation"],
    ),
    (
        Domain::SocialWelfare,
        &["pension", "elderly", "old age", "disabled", "welfare"],
    ),
    (Domain::FoodSecurity, &["food", "ration", "rice", "grain"]),
    (Domain::Electricity, &["electricity", "power", "electric"]),
    (
        Domain::Entrepreneurship,
        &["business", "enterprise", "entrepreneurship", "startup"],
    ),
];

/// Trigger phrases per intent, checked in fixed priority order.
const INTENT_TRIGGERS: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey", "good morning", "good evening"]),
    (Intent::Thanks, &["thank", "thanks", "thank you"]),
    (Intent::Eligibility, &["eligibility", "eligible", "qualify", "who can apply"]),
    (Intent::Benefits, &["benefit", "benefits", "what do i get", "what will i get"]),
    (Intent::Application, &["apply", "application", "how to apply", "registration", "register"]),
    (Intent::Website, &["link", "website", "official", "registration link"]),
    (Intent::Documents, &["document", "documents", "papers", "required"]),
    (Intent::List, &["list", "show", "tell me about", "schemes", "available"]),
];

/// Whether `needle` occurs in `haystack` delimited by word boundaries.
///
/// Plain `contains` is too eager for the short aliases in these tables:
/// "hi" would fire inside "CMCHIS" and "ap" inside "apply". A match must
/// not be flanked by alphanumeric characters on either side.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let bounded_left =
            begin == 0 || !haystack[..begin].chars().next_back().is_some_and(char::is_alphanumeric);
        let bounded_right =
            end == haystack.len() || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if bounded_left && bounded_right {
            return true;
        }
        match haystack[begin..].chars().next() {
            Some(c) => start = begin + c.len_utf8(),
            None => break,
        }
    }
    false
}

fn scan<T: Copy>(query: &str, table: &[(T, &[&str])]) -> Option<T> {
    let query = query.to_lowercase();
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| contains_phrase(&query, p)))
        .map(|(category, _)| *category)
}

/// Detects the state a query refers to, if any.
pub fn detect_state(query: &str) -> Option<State> {
    scan(query, STATE_ALIASES)
}

/// Detects the scheme domain a query refers to, if any.
pub fn detect_domain(query: &str) -> Option<Domain> {
    scan(query, DOMAIN_KEYWORDS)
}

/// Classifies a query's intent. Queries matching no trigger phrase are
/// `Intent::General`.
pub fn detect_intent(query: &str) -> Intent {
    scan(query, INTENT_TRIGGERS).unwrap_or(Intent::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_state_by_name_and_alias() {
        assert_eq!(detect_state("Health schemes in Tamil Nadu"), Some(State::TamilNadu));
        assert_eq!(detect_state("schemes in tamilnadu"), Some(State::TamilNadu));
        assert_eq!(detect_state("pondicherry pension"), Some(State::Puducherry));
        assert_eq!(detect_state("some generic query"), None);
    }

    #[test]
    fn test_detect_state_first_match_wins() {
        // "tn" appears before Kerala's aliases in the table.
        assert_eq!(detect_state("tn and kerala"), Some(State::TamilNadu));
    }

    #[test]
    fn test_detect_domain() {
        assert_eq!(detect_domain("health insurance for my family"), Some(Domain::Health));
        assert_eq!(detect_domain("scholarship for students"), Some(Domain::Education));
        assert_eq!(detect_domain("free electricity units"), Some(Domain::Electricity));
        assert_eq!(detect_domain("something unrelated"), None);
    }

    #[test]
    fn test_detect_intent_priority_order() {
        assert_eq!(detect_intent("hello there"), Intent::Greeting);
        assert_eq!(detect_intent("thanks a lot"), Intent::Thanks);
        // "eligibility" outranks "documents" because it is checked earlier.
        assert_eq!(detect_intent("eligibility and documents"), Intent::Eligibility);
        assert_eq!(detect_intent("what documents are needed"), Intent::Documents);
        assert_eq!(detect_intent("anything else entirely"), Intent::General);
    }

    #[test]
    fn test_aliases_respect_word_boundaries() {
        // "hi" must not fire inside "CMCHIS", nor "ap" inside "apply".
        assert_eq!(detect_intent("CMCHIS documents"), Intent::Documents);
        assert_eq!(detect_state("how to apply"), None);
        // "bus" must not fire inside "business".
        assert_eq!(detect_domain("business grant"), Some(Domain::Entrepreneurship));
    }

    #[test]
    fn test_detect_intent_is_pure() {
        let query = "how to apply for pension";
        assert_eq!(detect_intent(query), detect_intent(query));
    }

}
