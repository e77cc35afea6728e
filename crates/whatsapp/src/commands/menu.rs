//! Menu plugin: top-level and category menus

use chrono::Local;

use crate::catalog::{self, MenuSection};
use crate::client::{
    ImageMessage, IncomingMessage, LinkPreview, Messenger, Payload, SendOptions, TextMessage,
};
use crate::constants::{BOT_NAME, SOURCE_URL, TAGLINE};
use crate::error::BotError;
use crate::router::BotContext;
use crate::utils::{greeting, to_fancy_font};

/// Send the top-level menu with the category buttons.
///
/// The thumbnail is best effort; the greeting is recomputed on every
/// invocation so a long-lived process never shows a stale one.
pub async fn main_menu<M: Messenger>(
    msg: &IncomingMessage,
    messenger: &M,
    ctx: &BotContext,
) -> Result<(), BotError> {
    let image = fetch_menu_image(&ctx.http, &ctx.config.menu_image_url).await;
    let wish = greeting(Local::now().time());
    let text = catalog::render_main_menu(&ctx.config, wish, msg.display_name());

    let title = Some(format!("{} Menu", to_fancy_font(BOT_NAME, false)));
    let footer = Some(TAGLINE.to_string());
    let buttons = catalog::main_menu_buttons(&ctx.config.prefix);
    let mentions = vec![msg.sender.clone()];
    let preview = Some(LinkPreview {
        title: format!("{} Menu", to_fancy_font(BOT_NAME, false)),
        body: format!("{} Explore {}'s features!", wish, BOT_NAME),
        source_url: SOURCE_URL.to_string(),
    });

    let payload = match image {
        Some(image) => Payload::Image(ImageMessage {
            image,
            caption: text,
            title,
            footer,
            buttons,
            mentions,
            preview,
        }),
        None => Payload::Text(TextMessage {
            text,
            title,
            footer,
            buttons,
            mentions,
            preview,
        }),
    };

    messenger
        .send_message(&msg.chat, payload, SendOptions::quoting(msg))
        .await?;
    Ok(())
}

/// Send one category menu.
pub async fn submenu<M: Messenger>(
    msg: &IncomingMessage,
    messenger: &M,
    ctx: &BotContext,
    section: MenuSection,
) -> Result<(), BotError> {
    let text = catalog::render_submenu(&ctx.config, &section, msg.display_name());
    let preview = Some(LinkPreview {
        title: format!(
            "{} {}",
            to_fancy_font(BOT_NAME, false),
            to_fancy_font(section.title, false)
        ),
        body: format!(
            "Explore {}'s {} commands!",
            BOT_NAME,
            section.title.to_lowercase()
        ),
        source_url: SOURCE_URL.to_string(),
    });

    let payload = Payload::Text(TextMessage {
        text,
        mentions: vec![msg.sender.clone()],
        preview,
        ..Default::default()
    });

    messenger
        .send_message(&msg.chat, payload, SendOptions::quoting(msg))
        .await?;
    Ok(())
}

/// Best-effort fetch of the static menu thumbnail.
///
/// Any failure is logged and the menu goes out without an image.
async fn fetch_menu_image(client: &reqwest::Client, url: &str) -> Option<Vec<u8>> {
    let result = async {
        let resp = client.get(url).send().await?;
        resp.error_for_status()?.bytes().await
    }
    .await;

    match result {
        Ok(bytes) => Some(bytes.to_vec()),
        Err(err) => {
            tracing::warn!("failed to fetch menu image: {}", err);
            None
        }
    }
}
