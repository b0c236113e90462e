//! Order-preserving subsequence search over tagged items.
//!
//! # Design
//!
//! - One shared predicate ([`matcher`]) decides whether a normalized query is
//!   a subsequence of a normalized tag. Both engines go through
//!   [`SearchQuery`], so blocking and streaming searches cannot drift apart.
//! - Results are a stable filter of the input: no re-sorting, and each input
//!   position appears at most once however many of its tags match.
//!
//! # Engines
//!
//! - [`SyncSearchEngine::search`]: blocking, returns [`SearchResults`] borrowing the input.
//! - [`AsyncSearchEngine::search`]: returns a lazy, cancellable [`SearchStream`]
//!   that yields matches in input order.

pub mod matcher;

mod engine;
mod query;
mod results;

pub use engine::{
    AsyncSearchEngine, DEFAULT_STREAM_BUFFER, SearchStream, Subscriber, SubscriptionOutcome,
    SyncSearchEngine,
};
pub use query::SearchQuery;
pub use results::SearchResults;
pub use tagsift_core::types::{SearchConfig, TagExtractor};
pub use tagsift_core::{Result, SearchError};
