use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Unsupported config format '{0}' (expected toml, yaml, yml or json).")]
    UnsupportedFormat(String),

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid setting '{field}': {reason}")]
    InvalidSetting { field: String, reason: String },
}
