use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("failed to parse upstream response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, WebError>;
