//! Lexical utilities: keyword extraction and fuzzy string similarity.
//!
//! These are the leaf-level text helpers shared by the detectors and the
//! ranker. No domain knowledge lives here.

/// Common English words that carry no search signal.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "through", "during", "before", "after", "above", "below", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
];

/// Extracts search keywords from free text.
///
/// Lowercases the input, tokenizes on alphabetic runs, and drops stop words
/// and tokens of length <= 2. Order is preserved and duplicates are kept:
/// repetition signals emphasis to the ranker.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Normalized edit-similarity ratio between two strings, in `[0, 1]`.
///
/// Implements the classic longest-matching-blocks ratio
/// (`2 * matches / (len_a + len_b)` with matching blocks found by recursive
/// longest-common-substring) over lowercased inputs. Symmetric, and
/// `similarity(x, x) == 1.0` for any non-empty `x`.
///
/// Only used to detect near-exact scheme-name mentions; it is not a general
/// search primitive.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matched = matching_block_total(&a, &b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total length of matching blocks: the longest common substring, plus
/// matching blocks of the unmatched regions to its left and right.
fn matching_block_total(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_block_total(&a[..a_start], &b[..b_start])
        + matching_block_total(&a[a_start + len..], &b[b_start + len..])
}

/// Finds the longest common substring of `a` and `b`.
///
/// Returns `(start_in_a, start_in_b, length)`; ties resolve to the earliest
/// occurrence in `a`, then in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j + 1] holds the common-suffix length ending at a[i - 1], b[j].
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                cur[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = cur;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_drops_stop_words() {
        let keywords = extract_keywords("What are the health schemes in Tamil Nadu?");
        assert_eq!(keywords, vec!["health", "schemes", "tamil", "nadu"]);
    }

    #[test]
    fn test_extract_keywords_keeps_duplicates_in_order() {
        let keywords = extract_keywords("health health insurance");
        assert_eq!(keywords, vec!["health", "health", "insurance"]);
    }

    #[test]
    fn test_extract_keywords_drops_short_tokens() {
        // "tn" survives neither the stop-word list nor the length filter.
        let keywords = extract_keywords("schemes tn 2024");
        assert_eq!(keywords, vec!["schemes"]);
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("CMCHIS", "cmchis"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_symmetric() {
        let x = similarity("kudumbashree", "kudumbashre");
        let y = similarity("kudumbashre", "kudumbashree");
        assert_eq!(x, y);
        assert!(x > 0.9);
    }

    #[test]
    fn test_similarity_known_ratio() {
        // Matching blocks of "abcd"/"bcde" total 3 ("bcd"): 2*3/8 = 0.75.
        assert_eq!(similarity("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }
}
