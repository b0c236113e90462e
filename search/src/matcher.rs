//! Normalization and the subsequence predicate shared by every engine.

use std::borrow::Cow;
use tagsift_core::types::SearchConfig;

/// Applies the configured normalization: lowercase first, then trim.
///
/// Borrows the input when neither flag changes it.
pub fn normalize<'a>(text: &'a str, config: &SearchConfig) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);

    if config.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }

    if config.ignore_spaces {
        text = match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => {
                let trimmed = s.trim();
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_string())
                }
            }
        };
    }

    text
}

/// Returns true if every char of `query` occurs in `tag` in the same order.
///
/// Greedy: each query char consumes the tag up to and including its first
/// occurrence in the remaining suffix. An empty query always matches.
pub fn is_subsequence(query: &str, tag: &str) -> bool {
    let mut remaining = tag.chars();
    query.chars().all(|q| remaining.any(|c| c == q))
}

/// Normalizes both sides with `config`, then tests for a subsequence.
pub fn matches(query: &str, tag: &str, config: &SearchConfig) -> bool {
    is_subsequence(&normalize(query, config), &normalize(tag, config))
}
