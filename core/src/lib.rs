//! Shared types for tag-based subsequence search.
//!
//! - [`types::SearchConfig`]: normalization and empty-query flags, persisted as TOML.
//! - [`types::TagExtractor`]: per-item-type capability yielding searchable tags.
//! - [`error`]: the search error taxonomy.

pub mod error;
pub mod types;

pub use error::{Result, SearchError};
