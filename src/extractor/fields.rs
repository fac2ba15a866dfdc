//! Field inference heuristics over extracted text.
//!
//! These scans are deliberately crude substring and line checks. Which value
//! wins depends on the exact "first qualifying match" order, so they must not
//! be upgraded to richer entity recognition without changing the contract.

use std::collections::BTreeSet;

use crate::config::KeywordRule;

/// First up-to-`limit` characters of the text
pub(crate) fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// First line among the leading `scan_lines` with at most `max_words` words
/// and at least one alphabetic character, trimmed.
pub(crate) fn candidate_name(text: &str, scan_lines: usize, max_words: usize) -> Option<String> {
    text.lines()
        .take(scan_lines)
        .map(str::trim)
        .find(|line| {
            line.split_whitespace().count() <= max_words
                && line.chars().any(char::is_alphabetic)
        })
        .map(str::to_string)
}

/// Distinct configured keywords appearing case-insensitively anywhere in the
/// text. Order is irrelevant; the result is a set.
pub(crate) fn keyword_matches(text: &str, rules: &[KeywordRule]) -> BTreeSet<String> {
    let haystack = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| haystack.contains(&rule.keyword.to_lowercase()))
        .map(|rule| rule.keyword.clone())
        .collect()
}
