//! Response composer: renders the final text for each dialogue branch.
//!
//! Pure functions of the selected branch and record(s); no session state is
//! touched here. The section labels ("Eligibility for X:", "Benefits of X:",
//! ...) are part of the wire contract consumed downstream - changing their
//! shape breaks text-scraping consumers even though they are just prose.

use crate::catalog::SchemeRecord;
use crate::dialogue::FollowUpTopic;

/// Menu of sub-topics appended after a scheme overview.
const TOPIC_MENU: &str = "What would you like to know about this scheme?\n\
                          • Eligibility criteria\n\
                          • Benefits offered\n\
                          • Application process\n\
                          • Required documents\n\
                          • Official website";

/// Welcome text for the greeting branch.
pub fn greeting() -> String {
    "Hello! I can help you find government schemes across Southern Indian states.\n\n\
     Try asking:\n\
     • 'Health schemes in Tamil Nadu'\n\
     • 'Education schemes in Kerala'\n\
     • 'Women welfare schemes in Karnataka'\n\n\
     What would you like to know?"
        .to_string()
}

/// Closing acknowledgement for the thanks branch.
pub fn thanks() -> String {
    "You're welcome! Is there anything else you'd like to know about government schemes?"
        .to_string()
}

/// Answer for a specific attribute of a scheme.
pub fn attribute(scheme: &SchemeRecord, topic: FollowUpTopic) -> String {
    match topic {
        FollowUpTopic::Eligibility => {
            format!("Eligibility for {}:\n\n{}", scheme.name, scheme.eligibility)
        }
        FollowUpTopic::Benefits => {
            format!("Benefits of {}:\n\n{}", scheme.name, scheme.benefits)
        }
        FollowUpTopic::Application => {
            format!("How to apply for {}:\n\n{}", scheme.name, scheme.application_process)
        }
        FollowUpTopic::Website => {
            format!("Official website for {}:\n\n{}", scheme.name, scheme.official_website)
        }
        FollowUpTopic::Documents => {
            format!("Required documents for {}:\n\n{}", scheme.name, scheme.required_documents)
        }
    }
}

/// A scheme's description followed by the sub-topic menu.
pub fn overview(scheme: &SchemeRecord) -> String {
    format!(
        "{}\n\nDescription: {}\n\n{}",
        scheme.name, scheme.description, TOPIC_MENU
    )
}

/// Overview variant confirming a numeric selection from a list.
pub fn selected(scheme: &SchemeRecord) -> String {
    format!(
        "You selected {} from {}.\n\nDescription: {}\n\n{}",
        scheme.name, scheme.state, scheme.description, TOPIC_MENU
    )
}

/// Numbered "name (state)" list of ranked results.
pub fn scheme_list(schemes: &[&SchemeRecord]) -> String {
    let lines: Vec<String> = schemes
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {} ({})", i + 1, s.name, s.state))
        .collect();
    let lines = lines.join("\n");

    if schemes.len() == 1 {
        format!(
            "I found 1 scheme matching your query:\n\n{lines}\n\n\
             Type the number or scheme name to get more details."
        )
    } else {
        format!(
            "I found {} schemes matching your query:\n\n{lines}\n\n\
             Which scheme would you like to know about? (Type the number or scheme name)",
            schemes.len()
        )
    }
}

/// Prompt shown when a numeric selection is out of range.
pub fn out_of_range(list_len: usize) -> String {
    format!("Please select a number between 1 and {list_len}.")
}

/// Guidance shown when nothing in the catalog matched.
pub fn no_match() -> String {
    "I couldn't find any schemes matching your query.\n\n\
     Try being more specific:\n\
     • 'Health schemes in Tamil Nadu'\n\
     • 'Education scholarships in Kerala'\n\
     • 'Women welfare schemes in Karnataka'"
        .to_string()
}
