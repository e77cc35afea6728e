//! WhatsApp command plugins: menu and play
//!
//! The hosting framework owns the connection, session, and event loop. For
//! every incoming message it hands the message plus a [`Messenger`] handle to
//! [`router::dispatch`], which routes to the matching plugin — or does
//! nothing when the command word is unknown.

pub mod catalog;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod router;
pub mod utils;

pub use client::{IncomingMessage, Messenger, Payload, SendOptions};
pub use config::{BotConfig, Mode};
pub use error::{BotError, UserMessage};
pub use router::{dispatch, BotContext};
