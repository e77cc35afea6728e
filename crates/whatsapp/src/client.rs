//! The messaging-client capability plugins are handed per invocation
//!
//! The hosting framework owns the actual connection; a plugin only ever sees
//! an [`IncomingMessage`] and a [`Messenger`] to reply through. The contract
//! is deliberately minimal: a send either succeeds or returns an error.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;

/// Incoming chat message, read-only input to a plugin invocation
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Message id, referenced by quoted replies
    pub id: String,
    /// Chat the message arrived in, which is also the reply target
    pub chat: String,
    /// Sender jid
    pub sender: String,
    /// Sender display name, when the client reported one
    pub push_name: Option<String>,
    /// Raw text body
    pub body: String,
}

impl IncomingMessage {
    /// Display name with the fallback the menus use.
    pub fn display_name(&self) -> &str {
        self.push_name.as_deref().unwrap_or("User")
    }

    /// Reference to this message, for quoting.
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            id: self.id.clone(),
            sender: self.sender.clone(),
        }
    }
}

/// Handle to a prior message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub id: String,
    pub sender: String,
}

/// Per-send options
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Message this send is a quoted reply to
    pub quoted: Option<MessageRef>,
}

impl SendOptions {
    /// Options for a reply quoting `msg`.
    pub fn quoting(msg: &IncomingMessage) -> Self {
        SendOptions {
            quoted: Some(msg.message_ref()),
        }
    }
}

/// A tappable reply button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Command the tap injects, prefix included
    pub id: String,
    pub label: String,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Button {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// External link preview attached to a message
#[derive(Debug, Clone, Default)]
pub struct LinkPreview {
    pub title: String,
    pub body: String,
    pub source_url: String,
}

/// Text message with optional trimmings
#[derive(Debug, Clone, Default)]
pub struct TextMessage {
    pub text: String,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub buttons: Vec<Button>,
    /// Participant jids called out in the text
    pub mentions: Vec<String>,
    pub preview: Option<LinkPreview>,
}

/// Image with caption and the same trimmings as a text message
#[derive(Debug, Clone, Default)]
pub struct ImageMessage {
    pub image: Vec<u8>,
    pub caption: String,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub buttons: Vec<Button>,
    pub mentions: Vec<String>,
    pub preview: Option<LinkPreview>,
}

/// Audio attachment referencing a local file
#[derive(Debug, Clone)]
pub struct AudioMessage {
    pub path: PathBuf,
    pub mime_type: String,
    pub file_name: String,
    /// Rendered as a voice note when true
    pub voice_note: bool,
}

/// Outgoing message payload
#[derive(Debug, Clone)]
pub enum Payload {
    Text(TextMessage),
    Image(ImageMessage),
    Audio(AudioMessage),
}

impl Payload {
    /// Plain text payload with no trimmings.
    pub fn text(text: impl Into<String>) -> Self {
        Payload::Text(TextMessage {
            text: text.into(),
            ..Default::default()
        })
    }
}

/// Error surfaced by a messenger implementation
#[derive(Debug)]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        ClientError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClientError {}

/// Send capability the hosting framework provides
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(
        &self,
        chat: &str,
        payload: Payload,
        options: SendOptions,
    ) -> Result<(), ClientError>;
}
