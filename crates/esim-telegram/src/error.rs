//! Error types for the Telegram bot.

use teloxide::RequestError;
use thiserror::Error;

/// Errors that can occur in the Telegram bot.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// A Bot API call failed.
    #[error("Telegram request failed: {0}")]
    Request(#[from] RequestError),

    /// A button carries a malformed link.
    #[error("Invalid button URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A text handler received a message without text.
    #[error("Message has no text")]
    MissingText,

    /// A command that greets the user arrived without a sender.
    #[error("Message has no sender")]
    MissingSender,

    /// A callback arrived without the message its button belongs to.
    #[error("Callback has no origin message")]
    MissingOrigin,
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
