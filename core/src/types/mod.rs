pub(crate) mod config;
pub use config::{ConfigError, SearchConfig};

pub(crate) mod tags;
pub use tags::TagExtractor;
