//! Error types for mote

use thiserror::Error;

/// The main error type for mote operations
#[derive(Debug, Error)]
pub enum MoteError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Persistence error: {0}")]
    PersistError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Sampling error: {0}")]
    SamplingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for mote operations
pub type Result<T> = std::result::Result<T, MoteError>;

impl From<toml::de::Error> for MoteError {
    fn from(err: toml::de::Error) -> Self {
        MoteError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for MoteError {
    fn from(err: toml::ser::Error) -> Self {
        MoteError::TomlSerError(err.to_string())
    }
}
