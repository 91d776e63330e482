//! Error types for the widget configuration model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Configuration lock error: {0}")]
    Lock(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
