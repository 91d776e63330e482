//! Error types for embed code generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
