//! Bot configuration, sourced from the hosting environment

use crate::constants;

/// Operating mode of the hosting bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Public,
    Private,
}

impl Mode {
    /// Only the literal `"public"` opts in; anything else stays private.
    pub fn parse(value: &str) -> Self {
        if value == "public" {
            Mode::Public
        } else {
            Mode::Private
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Public => "public",
            Mode::Private => "private",
        }
    }
}

/// Configuration handed to every plugin invocation
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Command prefix, e.g. `.`
    pub prefix: String,
    pub mode: Mode,
    /// Static thumbnail fetched for the main menu
    pub menu_image_url: String,
    /// Command count advertised on the main menu
    pub total_commands: usize,
}

impl BotConfig {
    /// Read `WA_PREFIX`, `WA_MODE`, and `WA_MENU_IMAGE_URL`, with defaults.
    pub fn from_env() -> Self {
        let prefix = std::env::var("WA_PREFIX").unwrap_or_else(|_| ".".to_string());
        let mode = Mode::parse(&std::env::var("WA_MODE").unwrap_or_default());
        let menu_image_url = std::env::var("WA_MENU_IMAGE_URL")
            .unwrap_or_else(|_| constants::DEFAULT_MENU_IMAGE_URL.to_string());

        BotConfig {
            prefix,
            mode,
            menu_image_url,
            total_commands: constants::TOTAL_COMMANDS,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            prefix: ".".to_string(),
            mode: Mode::Private,
            menu_image_url: constants::DEFAULT_MENU_IMAGE_URL.to_string(),
            total_commands: constants::TOTAL_COMMANDS,
        }
    }
}
