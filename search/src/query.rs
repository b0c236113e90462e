//! Normalized search query.

use crate::matcher::{is_subsequence, normalize};
use tagsift_core::types::{SearchConfig, TagExtractor};
use tagsift_core::{Result, SearchError};

/// A query normalized once against a config snapshot.
///
/// Both engines decide emptiness and per-item matches through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
    config: SearchConfig,
}

impl SearchQuery {
    pub fn new(raw: &str, config: SearchConfig) -> Self {
        Self {
            normalized: normalize(raw, &config).into_owned(),
            config,
        }
    }

    /// The query after case folding and trimming.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// True if nothing is left after normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether the empty-query branch yields every item.
    pub fn shows_all(&self) -> bool {
        self.config.show_all_on_empty_query
    }

    pub fn matches_tag(&self, tag: &str) -> bool {
        is_subsequence(&self.normalized, &normalize(tag, &self.config))
    }

    /// Returns true if any tag of `item` matches. Stops at the first match.
    ///
    /// `index` is the item's position in the input, used for error reporting.
    pub fn matches_item<T, E>(&self, item: &T, extractor: &E, index: usize) -> Result<bool>
    where
        T: ?Sized,
        E: TagExtractor<T> + ?Sized,
    {
        let Some(tags) = extractor.tags(item) else {
            tracing::warn!(index, "tag extractor returned no tag sequence");
            return Err(SearchError::InvalidInput { index });
        };

        Ok(tags.iter().any(|tag| self.matches_tag(tag)))
    }
}
