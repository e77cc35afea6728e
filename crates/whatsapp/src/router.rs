//! Command routing and the handler-wide guard

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog;
use crate::client::{IncomingMessage, Messenger, Payload, SendOptions};
use crate::commands;
use crate::config::BotConfig;
use crate::constants;
use crate::error::{BotError, UserMessage};
use crate::utils::parse_command;
use media::{ResolverApi, SearchApi};

/// Everything a plugin invocation needs besides the message and messenger
#[derive(Debug, Clone)]
pub struct BotContext {
    pub config: BotConfig,
    /// Shared HTTP client for thumbnails and downloads
    pub http: reqwest::Client,
    pub search: SearchApi,
    pub resolver: ResolverApi,
    /// Where in-flight downloads land
    pub download_dir: PathBuf,
    /// How long a delivered file lingers before deletion
    pub cleanup_delay: Duration,
}

impl BotContext {
    /// Context with config and service endpoints read from the environment.
    pub fn from_env() -> Self {
        let http = reqwest::Client::new();
        BotContext {
            config: BotConfig::from_env(),
            search: SearchApi::from_env(http.clone()),
            resolver: ResolverApi::from_env(http.clone()),
            http,
            download_dir: std::env::temp_dir(),
            cleanup_delay: Duration::from_secs(constants::CLEANUP_DELAY_SECS),
        }
    }
}

/// Route one incoming message to its plugin.
///
/// Messages without the prefix, and command words nobody owns, are ignored.
/// A plugin error is logged and answered with the generic failure reply;
/// only a failure to deliver that reply is returned to the host.
pub async fn dispatch<M: Messenger>(
    msg: &IncomingMessage,
    messenger: &M,
    ctx: &BotContext,
) -> Result<(), BotError> {
    let Some((cmd, args)) = parse_command(&msg.body, &ctx.config.prefix) else {
        return Ok(());
    };

    match route(&cmd, args, msg, messenger, ctx).await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!("handler failed for {:?}: {}", cmd, err);
            messenger
                .send_message(
                    &msg.chat,
                    Payload::text(err.user_message()),
                    SendOptions::quoting(msg),
                )
                .await?;
            Ok(())
        }
    }
}

async fn route<M: Messenger>(
    cmd: &str,
    args: &str,
    msg: &IncomingMessage,
    messenger: &M,
    ctx: &BotContext,
) -> Result<(), BotError> {
    if cmd == "play" {
        return commands::play::handle(msg, args, messenger, ctx).await;
    }
    if catalog::is_main_menu(cmd) {
        return commands::menu::main_menu(msg, messenger, ctx).await;
    }
    if let Some(section) = catalog::submenu(cmd) {
        return commands::menu::submenu(msg, messenger, ctx, section).await;
    }
    Ok(())
}
