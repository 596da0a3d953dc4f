use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("An error occurred while decoding the JSON data in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No data found in {0}.")]
    Empty(String),

    #[error("Element {index} of {path} is not a key/value mapping.")]
    NotARecord { path: String, index: usize },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No files match '{0}'.")]
    NoMatches(String),
}
