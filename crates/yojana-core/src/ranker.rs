//! Scheme ranker: scores catalog records against a query and returns a
//! capped, ranked shortlist.
//!
//! State and domain act as hard gates, not soft signals: a record from the
//! wrong state is excluded outright rather than penalized. Callers should
//! therefore only pass a state/domain they are confident about.

use crate::catalog::{SchemeCatalog, SchemeRecord};
use crate::detect::{Domain, State};
use crate::lexical::{extract_keywords, similarity};

/// How many results a query may return at most.
const MAX_RESULTS: usize = 5;

/// Score awarded when the whole query is a near-exact scheme-name mention.
const NAME_SIMILARITY_BONUS: i64 = 1000;
/// Score awarded when the record's state matches the requested one.
const STATE_MATCH_BONUS: i64 = 500;
/// Score awarded when the record's domain matches the requested one.
const DOMAIN_MATCH_BONUS: i64 = 300;
/// Score per keyword occurring in the record's combined searchable text.
const TEXT_KEYWORD_BONUS: i64 = 50;
/// Additional score per keyword occurring in the record's name.
const NAME_KEYWORD_BONUS: i64 = 100;

/// A scored catalog record, ephemeral to a single query.
#[derive(Debug, Clone, Copy)]
pub struct RankedMatch<'a> {
    pub scheme: &'a SchemeRecord,
    pub score: i64,
}

/// Scores every catalog record against the query and returns the matches
/// sorted by descending score, ties broken by catalog order.
///
/// Records scoring zero are discarded. State and domain filters exclude
/// non-matching records entirely.
pub fn rank_schemes<'a>(
    catalog: &'a SchemeCatalog,
    query: &str,
    state: Option<State>,
    domain: Option<Domain>,
) -> Vec<RankedMatch<'a>> {
    let keywords = extract_keywords(query);
    let mut matches: Vec<RankedMatch<'a>> = Vec::new();

    for scheme in catalog.schemes() {
        let mut score = 0;

        if similarity(query, &scheme.name) > 0.6 {
            score += NAME_SIMILARITY_BONUS;
        }

        if let Some(state) = state {
            if scheme.state.eq_ignore_ascii_case(state.name()) {
                score += STATE_MATCH_BONUS;
            } else {
                continue;
            }
        }

        if let Some(domain) = domain {
            if scheme.domain.eq_ignore_ascii_case(domain.name()) {
                score += DOMAIN_MATCH_BONUS;
            } else {
                continue;
            }
        }

        let searchable =
            format!("{} {} {}", scheme.name, scheme.description, scheme.domain).to_lowercase();
        let name = scheme.name.to_lowercase();
        for keyword in &keywords {
            if searchable.contains(keyword.as_str()) {
                score += TEXT_KEYWORD_BONUS;
            }
            // Name hits count on top of the combined-text hit above.
            if name.contains(keyword.as_str()) {
                score += NAME_KEYWORD_BONUS;
            }
        }

        if score > 0 {
            matches.push(RankedMatch { scheme, score });
        }
    }

    // Stable sort keeps catalog order for equal scores.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Returns at most [`MAX_RESULTS`] records matching the query, best first.
pub fn find_schemes<'a>(
    catalog: &'a SchemeCatalog,
    query: &str,
    state: Option<State>,
    domain: Option<Domain>,
) -> Vec<&'a SchemeRecord> {
    rank_schemes(catalog, query, state, domain)
        .into_iter()
        .take(MAX_RESULTS)
        .map(|m| m.scheme)
        .collect()
}
