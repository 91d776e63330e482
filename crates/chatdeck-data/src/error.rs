//! Error types for the console data boundary
//!
//! The in-memory fixtures cannot fail, but every service call returns a
//! `Result` so the signatures hold when a real backend replaces them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
