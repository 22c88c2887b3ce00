//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for transport, configuration and IO failures.
///
/// Storage errors never reach here: handlers answer them at the chat boundary.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
