//! Static content shared across the plugins

/// Bot display name woven through the reply texts
pub const BOT_NAME: &str = "Wavelet";

/// Decorative frame line every reply is wrapped in
pub const FRAME: &str = "◈━━━━━━━━━━━━━━━━◈";

/// Footer tagline
pub const TAGLINE: &str = "Powered by Wavelet";

/// Project page advertised in link previews
pub const SOURCE_URL: &str = "https://github.com/wavelet-bot/wavelet";

/// Command count advertised on the main menu
pub const TOTAL_COMMANDS: usize = 70;

/// Static thumbnail shown on the main menu
pub const DEFAULT_MENU_IMAGE_URL: &str = "https://files.catbox.moe/y2utve.jpg";

/// Mime type for delivered tracks
pub const AUDIO_MIME: &str = "audio/mpeg";

/// Seconds a delivered file lingers before cleanup
pub const CLEANUP_DELAY_SECS: u64 = 5;
