use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to start parser program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while talking to parser program '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parser rejected '{parser}' (os={os}): {message}")]
    Rejected {
        parser: String,
        os: String,
        message: String,
    },

    #[error("Parser produced invalid JSON for '{parser}': {source}")]
    InvalidOutput {
        parser: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Parser output for '{parser}' is not a key/value mapping.")]
    NotAMapping { parser: String },
}
