// Engine Errors
// Input-contract violations and config/IO failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no input text supplied")]
    MissingInput,
    #[error("input has {tokens} tokens, limit is {limit}")]
    InputTooLarge { tokens: usize, limit: usize },
    #[error("source is {bytes} bytes, limit is {limit}")]
    SourceTooLarge { bytes: u64, limit: u64 },
    #[error("source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
