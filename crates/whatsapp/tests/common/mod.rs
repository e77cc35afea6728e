//! Shared fixtures for the plugin tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use whatsapp::client::{ClientError, IncomingMessage, Messenger, Payload, SendOptions};
use whatsapp::config::{BotConfig, Mode};
use whatsapp::router::BotContext;

use media::{ResolverApi, SearchApi};

pub struct SentMessage {
    pub chat: String,
    pub payload: Payload,
    pub options: SendOptions,
}

/// Messenger that records every send instead of delivering it.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<SentMessage>>,
    /// Reject audio payloads, simulating an attach failure
    pub fail_audio: bool,
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        chat: &str,
        payload: Payload,
        options: SendOptions,
    ) -> Result<(), ClientError> {
        if self.fail_audio && matches!(payload, Payload::Audio(_)) {
            return Err(ClientError::new("attach rejected"));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat: chat.to_string(),
            payload,
            options,
        });
        Ok(())
    }
}

impl RecordingMessenger {
    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Text bodies of every recorded reply, captions included.
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|s| match &s.payload {
                Payload::Text(t) => Some(t.text.clone()),
                Payload::Image(i) => Some(i.caption.clone()),
                Payload::Audio(_) => None,
            })
            .collect()
    }

    pub fn audio_paths(&self) -> Vec<PathBuf> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|s| match &s.payload {
                Payload::Audio(a) => Some(a.path.clone()),
                _ => None,
            })
            .collect()
    }

    /// Assert that every recorded reply quotes the triggering message.
    pub fn assert_all_quote(&self, message_id: &str) {
        for sent in self.sent.lock().unwrap().iter() {
            let quoted = sent.options.quoted.as_ref().expect("reply not quoted");
            assert_eq!(quoted.id, message_id);
        }
    }
}

pub fn message(body: &str) -> IncomingMessage {
    IncomingMessage {
        id: "MSG-1".to_string(),
        chat: "12036302@g.us".to_string(),
        sender: "254700000001@s.whatsapp.net".to_string(),
        push_name: Some("Tester".to_string()),
        body: body.to_string(),
    }
}

/// Context pointed entirely at a mock server, downloads into `download_dir`.
pub fn context(server_uri: &str, download_dir: PathBuf) -> BotContext {
    let http = reqwest::Client::new();
    BotContext {
        config: BotConfig {
            prefix: ".".to_string(),
            mode: Mode::Private,
            menu_image_url: format!("{}/menu.jpg", server_uri),
            total_commands: 70,
        },
        search: SearchApi::new(http.clone(), format!("{}/yts", server_uri)),
        resolver: ResolverApi::new(http.clone(), format!("{}/ytmp3", server_uri)),
        http,
        download_dir,
        cleanup_delay: Duration::from_millis(500),
    }
}
