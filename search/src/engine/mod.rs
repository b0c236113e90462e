mod stream;
mod subscriber;

use crate::query::SearchQuery;
use crate::results::SearchResults;
use tagsift_core::Result;
use tagsift_core::types::{SearchConfig, TagExtractor};

pub use stream::{AsyncSearchEngine, DEFAULT_STREAM_BUFFER, SearchStream};
pub use subscriber::{Subscriber, SubscriptionOutcome};

/// Flag accessors shared by both engines. The config is read once at the
/// start of every search, so it may be changed freely between calls.
macro_rules! config_accessors {
    ($engine:ty) => {
        /// Configuration operations.
        impl $engine {
            pub fn config(&self) -> &SearchConfig {
                &self.config
            }

            pub fn set_config(&mut self, config: SearchConfig) {
                self.config = config;
            }

            pub fn ignore_case(&self) -> bool {
                self.config.ignore_case
            }

            pub fn set_ignore_case(&mut self, ignore_case: bool) {
                self.config.ignore_case = ignore_case;
            }

            pub fn ignore_spaces(&self) -> bool {
                self.config.ignore_spaces
            }

            /// Trims leading/trailing whitespace only; interior spaces are kept.
            pub fn set_ignore_spaces(&mut self, ignore_spaces: bool) {
                self.config.ignore_spaces = ignore_spaces;
            }

            pub fn show_all_on_empty_query(&self) -> bool {
                self.config.show_all_on_empty_query
            }

            pub fn set_show_all_on_empty_query(&mut self, show_all: bool) {
                self.config.show_all_on_empty_query = show_all;
            }
        }
    };
}

pub(crate) use config_accessors;

/// Blocking search engine. Every call scans the whole input and returns a
/// materialized, order-preserving result.
#[derive(Debug, Clone, Default)]
pub struct SyncSearchEngine {
    config: SearchConfig,
}

impl SyncSearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

config_accessors!(SyncSearchEngine);

/// Search operations.
impl SyncSearchEngine {
    /// Returns the items having at least one tag the query is a subsequence of.
    ///
    /// An empty query (after normalization) returns every item when
    /// `show_all_on_empty_query` is set and nothing otherwise, without calling
    /// the extractor. Fails with `InvalidInput` on the first item the
    /// extractor yields no tags for.
    pub fn search<'a, T, E>(
        &self,
        query: &str,
        items: &'a [T],
        extractor: &E,
    ) -> Result<SearchResults<'a, T>>
    where
        E: TagExtractor<T> + ?Sized,
    {
        let query = SearchQuery::new(query, self.config);

        if query.is_empty() {
            tracing::debug!(
                items = items.len(),
                show_all = query.shows_all(),
                "empty query"
            );
            return Ok(if query.shows_all() {
                SearchResults::all(items)
            } else {
                SearchResults::none(items)
            });
        }

        let mut indices = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if query.matches_item(item, extractor, index)? {
                indices.push(index);
            }
        }

        tracing::debug!(
            query = query.as_str(),
            items = items.len(),
            matched = indices.len(),
            ignore_case = self.config.ignore_case,
            ignore_spaces = self.config.ignore_spaces,
            "search finished"
        );

        Ok(SearchResults { items, indices })
    }
}
