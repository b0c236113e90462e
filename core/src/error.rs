use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The tag extractor produced no tag sequence for the item at `index`.
    #[error("invalid input: tag extractor returned no tags for item at index {index}")]
    InvalidInput { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
