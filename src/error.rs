use thiserror::Error;

#[derive(Debug, Error)]
pub enum StylistError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Decode error: {0}")]
    DecodeError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Generation error: {0}")]
    GenerationError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Request error: {0}")]
    RequestError(String),
}

pub type Result<T> = std::result::Result<T, StylistError>;
