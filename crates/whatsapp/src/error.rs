use std::fmt;

use crate::client::ClientError;
use crate::constants::BOT_NAME;
use crate::utils::framed;
use media::MediaError;

/// Custom error type for plugin operations
#[derive(Debug)]
pub enum BotError {
    /// Messaging client error
    Client(ClientError),
    /// External media service error
    Media(MediaError),
    /// Generic error with message
    Message(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Client(e) => write!(f, "client error: {}", e),
            BotError::Media(e) => write!(f, "media error: {}", e),
            BotError::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BotError {}

impl From<ClientError> for BotError {
    fn from(err: ClientError) -> Self {
        BotError::Client(err)
    }
}

impl From<MediaError> for BotError {
    fn from(err: MediaError) -> Self {
        BotError::Media(err)
    }
}

/// Helper trait to convert errors into user-facing replies
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        framed(&format!(
            "│❒ *{}* hit a snag! Error: {} 😡",
            BOT_NAME, self
        ))
    }
}
