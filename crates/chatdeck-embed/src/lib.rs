//! ChatDeck Embed Code Generation
//!
//! Turns a widget configuration snapshot into the snippet a customer pastes
//! into their site: a script tag, an iframe tag, or a component snippet.
//! The iframe and component formats carry a sanitized section subset.

pub mod error;
pub mod generator;
pub mod sanitize;

pub use error::{EmbedError, Result};
pub use generator::{EmbedCodeGenerator, EmbedFormat, DEFAULT_EMBED_URL, DEFAULT_LOADER_URL};
pub use sanitize::EmbedConfig;
