use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid range")]
    InvalidRange { start: i64, end: i64 },

    #[error("Arithmetic overflow: 3 * {value} + 1 does not fit in 128 bits")]
    Overflow { value: u128 },

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
