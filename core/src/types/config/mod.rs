mod search;

pub use search::{ConfigError, SearchConfig};
