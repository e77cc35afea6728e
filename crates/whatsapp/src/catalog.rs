//! Static menu catalog
//!
//! Immutable mapping from command keyword to menu content, plus the pure
//! rendering of the framed menu texts. Content only — the handlers in
//! [`crate::commands::menu`] do the sending.

use crate::client::Button;
use crate::config::BotConfig;
use crate::constants::{BOT_NAME, FRAME, TAGLINE};
use crate::utils::to_fancy_font;

/// A sub-menu section: display title plus framed body
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub title: &'static str,
    pub body: String,
}

/// True for the keywords that open the top-level menu.
pub fn is_main_menu(cmd: &str) -> bool {
    matches!(cmd, "list" | "help" | "menu")
}

/// Look up a sub-menu section by command keyword.
pub fn submenu(cmd: &str) -> Option<MenuSection> {
    let (title, emoji, commands): (&'static str, &str, &[&str]) = match cmd {
        "download-menu" => (
            "Download",
            "📥",
            &[
                "apk", "facebook", "mediafire", "pinters", "gitclone", "gdrive", "insta",
                "ytmp3", "ytmp4", "play", "song", "video", "ytmp3doc", "ytmp4doc", "tiktok",
            ],
        ),
        "converter-menu" => (
            "Converter",
            "🔄",
            &["attp", "attp2", "attp3", "ebinary", "dbinary", "emojimix", "mp3"],
        ),
        "ai-menu" => (
            "AI",
            "🤖",
            &["ai", "bug", "report", "gpt", "dalle", "remini", "gemini"],
        ),
        "tools-menu" => (
            "Tools",
            "🛠",
            &["calculator", "tempmail", "checkmail", "trt", "tts"],
        ),
        "group-menu" => (
            "Group",
            "👥",
            &[
                "linkgroup", "setppgc", "setname", "setdesc", "group", "gcsetting", "welcome",
                "add", "kick", "hidetag", "tagall", "antilink", "antitoxic", "promote",
                "demote", "getbio",
            ],
        ),
        "search-menu" => (
            "Search",
            "🔍",
            &[
                "play", "yts", "imdb", "google", "gimage", "pinterest", "wallpaper",
                "wikimedia", "ytsearch", "ringtone", "lyrics",
            ],
        ),
        "main-menu" => ("Main", "⚙", &["ping", "alive", "owner", "menu", "infobot"]),
        "owner-menu" => (
            "Owner",
            "🔒",
            &[
                "join", "leave", "block", "unblock", "setppbot", "anticall", "setstatus",
                "setnamebot", "autorecording", "autolike", "autotyping", "alwaysonline",
                "autoread", "autosview",
            ],
        ),
        "stalk-menu" => ("Stalk", "🕵", &["truecaller", "instastalk", "githubstalk"]),
        _ => return None,
    };

    Some(MenuSection {
        title,
        body: section_body(title, emoji, commands),
    })
}

fn section_body(title: &str, emoji: &str, commands: &[&str]) -> String {
    let mut body = format!("{}\n│❒ {} {}\n", FRAME, to_fancy_font(title, false), emoji);
    for cmd in commands {
        body.push_str(&format!("│ ✘ *{}*\n", to_fancy_font(cmd, false)));
    }
    body.push_str(FRAME);
    body
}

/// The nine category buttons shown under the main menu.
pub fn main_menu_buttons(prefix: &str) -> Vec<Button> {
    [
        ("download-menu", "📥 Download"),
        ("converter-menu", "🔄 Converter"),
        ("ai-menu", "🤖 AI"),
        ("tools-menu", "🛠 Tools"),
        ("group-menu", "👥 Group"),
        ("search-menu", "🔍 Search"),
        ("main-menu", "⚙ Main"),
        ("owner-menu", "🔒 Owner"),
        ("stalk-menu", "🕵 Stalk"),
    ]
    .iter()
    .map(|(cmd, label)| Button::new(format!("{}{}", prefix, cmd), *label))
    .collect()
}

/// Render the full top-level menu text.
pub fn render_main_menu(config: &BotConfig, wish: &str, display_name: &str) -> String {
    format!(
        "{frame}\n\
         │❒ {bot} Command Menu ⚠\n\
         │\n\
         │ 🤖 *{l_bot}*: {bot}\n\
         │ 📋 *{l_total}*: {total}\n\
         │ 🔣 *{l_prefix}*: {prefix}\n\
         │ 🌐 *{l_mode}*: {mode}\n\
         {frame}\n\
         \n\
         {wish} @{name}! Tap a button to pick a menu category:\n\
         \n\
         > {tagline}",
        frame = FRAME,
        bot = to_fancy_font(BOT_NAME, false),
        l_bot = to_fancy_font("Bot", false),
        l_total = to_fancy_font("Total Commands", false),
        total = config.total_commands,
        l_prefix = to_fancy_font("Prefix", false),
        prefix = config.prefix,
        l_mode = to_fancy_font("Mode", false),
        mode = config.mode.as_str(),
        wish = wish,
        name = display_name,
        tagline = TAGLINE,
    )
}

/// Render a sub-menu reply: header, section body, tagline.
pub fn render_submenu(config: &BotConfig, section: &MenuSection, display_name: &str) -> String {
    format!(
        "{frame}\n\
         │❒ {bot} - {title} ⚠\n\
         │\n\
         │ 🤖 *{l_bot}*: {bot}\n\
         │ 👤 *{l_user}*: {name}\n\
         │ 🔣 *{l_prefix}*: {prefix}\n\
         {frame}\n\
         \n\
         {body}\n\
         \n\
         > {tagline}",
        frame = FRAME,
        bot = to_fancy_font(BOT_NAME, false),
        title = to_fancy_font(section.title, false),
        l_bot = to_fancy_font("Bot", false),
        l_user = to_fancy_font("User", false),
        name = display_name,
        l_prefix = to_fancy_font("Prefix", false),
        prefix = config.prefix,
        body = section.body,
        tagline = TAGLINE,
    )
}
