//! Play plugin: search a track, resolve a download, deliver the audio
//!
//! One linear pipeline per invocation: parse → search → resolve → download →
//! send → delayed cleanup. Each external failure is caught at its step,
//! logged, and turned into one framed reply; a fresh command starts over
//! from the beginning.

use crate::client::{AudioMessage, IncomingMessage, Messenger, Payload, SendOptions};
use crate::constants::{AUDIO_MIME, BOT_NAME};
use crate::error::BotError;
use crate::router::BotContext;
use crate::utils::{format_duration, framed};
use media::download;
use media::{ResolvedAudio, VideoResult};

pub async fn handle<M: Messenger>(
    msg: &IncomingMessage,
    query: &str,
    messenger: &M,
    ctx: &BotContext,
) -> Result<(), BotError> {
    if query.is_empty() {
        let text = framed("│❒ Give me a song name or keywords to search 😎");
        messenger
            .send_message(&msg.chat, Payload::text(text), SendOptions::quoting(msg))
            .await?;
        return Ok(());
    }

    let ack = framed(&format!(
        "│❒ *{}* huntin' for \"{}\"... 🎧",
        BOT_NAME, query
    ));
    messenger
        .send_message(&msg.chat, Payload::text(ack), SendOptions::quoting(msg))
        .await?;

    let videos = ctx.search.search(query).await?;
    let song = match videos.into_iter().next() {
        Some(song) => song,
        None => {
            let text = framed(&format!(
                "│❒ No tracks found for \"{}\". You slippin'! 💀",
                query
            ));
            messenger
                .send_message(&msg.chat, Payload::text(text), SendOptions::quoting(msg))
                .await?;
            return Ok(());
        }
    };

    let resolved = match ctx.resolver.resolve(&song.url).await {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::error!("API error for {:?}: {}", song.title, err);
            messenger
                .send_message(
                    &msg.chat,
                    Payload::text(api_failure(&song.title, &err)),
                    SendOptions::quoting(msg),
                )
                .await?;
            return Ok(());
        }
    };

    messenger
        .send_message(
            &msg.chat,
            Payload::text(track_info(&song, &resolved)),
            SendOptions::quoting(msg),
        )
        .await?;

    let file_name = download::unique_file_name(&song.title);
    let file_path = ctx.download_dir.join(&file_name);
    if let Err(err) = download::download_to_file(&ctx.http, &resolved.download_url, &file_path).await
    {
        tracing::error!("API error for {:?}: {}", song.title, err);
        messenger
            .send_message(
                &msg.chat,
                Payload::text(api_failure(&song.title, &err)),
                SendOptions::quoting(msg),
            )
            .await?;
        return Ok(());
    }

    let audio = AudioMessage {
        path: file_path.clone(),
        mime_type: AUDIO_MIME.to_string(),
        file_name,
        voice_note: false,
    };
    let sent = messenger
        .send_message(&msg.chat, Payload::Audio(audio), SendOptions::quoting(msg))
        .await;

    // The file is transient even when the send fails
    download::schedule_cleanup(file_path, ctx.cleanup_delay);

    if let Err(err) = sent {
        tracing::error!("failed to send audio: {}", err);
        let text = framed(&format!(
            "│❒ *{}* can't play \"{}\". Failed to send audio 😣",
            BOT_NAME, song.title
        ));
        messenger
            .send_message(&msg.chat, Payload::text(text), SendOptions::quoting(msg))
            .await?;
        return Ok(());
    }

    let text = framed(&format!(
        "│❒ *{}* dropped by *{}*! Blast it! 🎶",
        song.title, BOT_NAME
    ));
    messenger
        .send_message(&msg.chat, Payload::text(text), SendOptions::quoting(msg))
        .await?;
    Ok(())
}

/// Track details combining the search hit with what the resolver reported.
fn track_info(song: &VideoResult, resolved: &ResolvedAudio) -> String {
    let title = resolved.title.as_deref().unwrap_or(&song.title);
    let quality = resolved.quality.as_deref().unwrap_or("Unknown");
    let duration = resolved
        .duration
        .map(format_duration)
        .unwrap_or_else(|| song.timestamp.clone());

    framed(&format!(
        "│❒ *{bot}* Song Intel 🔥\n\
         │❒ *Title*: {title}\n\
         │❒ *Quality*: {quality}\n\
         │❒ *Duration*: {duration}\n\
         │❒ *Channel*: {channel}\n\
         │❒ *Uploaded*: {ago}\n\
         │❒ *URL*: {url}",
        bot = BOT_NAME,
        title = title,
        quality = quality,
        duration = duration,
        channel = song.author.name,
        ago = song.ago,
        url = song.url,
    ))
}

fn api_failure(title: &str, err: &media::MediaError) -> String {
    framed(&format!(
        "│❒ *{}* couldn't process \"{}\". API error: {} 😡",
        BOT_NAME, title, err
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_info_prefers_resolver_metadata() {
        let song = sample_song();
        let resolved = ResolvedAudio {
            download_url: "https://cdn.example.com/a.mp3".to_string(),
            title: Some("Resolver Title".to_string()),
            quality: Some("128kbps".to_string()),
            duration: Some(225),
        };
        let info = track_info(&song, &resolved);
        assert!(info.contains("Resolver Title"));
        assert!(info.contains("128kbps"));
        assert!(info.contains("3:45"));
        assert!(info.contains("Search Channel"));
    }

    #[test]
    fn test_track_info_falls_back_to_search_hit() {
        let song = sample_song();
        let resolved = ResolvedAudio {
            download_url: "https://cdn.example.com/a.mp3".to_string(),
            title: None,
            quality: None,
            duration: None,
        };
        let info = track_info(&song, &resolved);
        assert!(info.contains("Search Title"));
        assert!(info.contains("Unknown"));
        // Duration falls back to the displayed timestamp
        assert!(info.contains("4:03"));
    }

    fn sample_song() -> VideoResult {
        serde_json::from_value(serde_json::json!({
            "title": "Search Title",
            "url": "https://youtu.be/abc",
            "author": { "name": "Search Channel" },
            "ago": "1 year ago",
            "timestamp": "4:03",
            "seconds": 243
        }))
        .unwrap()
    }
}
