//! Error types for Opsdeck Core

use thiserror::Error;

/// Result type alias using Opsdeck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Opsdeck error types
///
/// The taxonomy is narrow on purpose: the simulation itself cannot fail, and
/// malformed plan text degrades instead of erroring. What remains is input
/// rejection at the service boundary plus config/serialization plumbing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Task error: {0}")]
    Task(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
