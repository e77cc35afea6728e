//! Pure helpers shared by the plugins

use chrono::{NaiveTime, Timelike};

use crate::constants::FRAME;

/// Split a message body into command word and argument string.
///
/// Returns `None` when the body does not start with the prefix or carries no
/// command word. The command word is lowercased; arguments keep their casing
/// and are trimmed at both ends.
pub fn parse_command<'a>(body: &'a str, prefix: &str) -> Option<(String, &'a str)> {
    let rest = body.strip_prefix(prefix)?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let cmd = parts.next()?.to_lowercase();
    if cmd.is_empty() {
        return None;
    }
    let args = parts.next().unwrap_or("").trim();
    Some((cmd, args))
}

/// Map a Latin letter onto its decorative glyph, `None` for everything else.
fn styled(c: char) -> Option<char> {
    // Mathematical sans-serif bold italic block: 𝘼 at U+1D63C, 𝙖 at U+1D656
    const UPPER_BASE: u32 = 0x1D63C;
    const LOWER_BASE: u32 = 0x1D656;
    match c {
        'A'..='Z' => char::from_u32(UPPER_BASE + (c as u32 - 'A' as u32)),
        'a'..='z' => char::from_u32(LOWER_BASE + (c as u32 - 'a' as u32)),
        _ => None,
    }
}

/// Render text in the decorative font the menus use.
///
/// Unmapped characters pass through unchanged. With `uppercase` set the text
/// is uppercased before mapping.
pub fn to_fancy_font(text: &str, uppercase: bool) -> String {
    let source = if uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };
    source.chars().map(|c| styled(c).unwrap_or(c)).collect()
}

/// Time-of-day greeting.
///
/// The <05:00 and <18:00 bands duplicate their successors; the table is kept
/// verbatim and pinned by tests.
pub fn greeting(time: NaiveTime) -> &'static str {
    let hour = time.hour();
    if hour < 5 {
        "Good Morning 🌄"
    } else if hour < 11 {
        "Good Morning 🌄"
    } else if hour < 15 {
        "Good Afternoon 🌅"
    } else if hour < 18 {
        "Good Evening 🌃"
    } else if hour < 19 {
        "Good Evening 🌃"
    } else {
        "Good Night 🌌"
    }
}

/// Format a duration in seconds as M:SS.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Wrap reply lines in the decorative frame every reply uses.
pub fn framed(body: &str) -> String {
    format!("{}\n{}\n{}", FRAME, body, FRAME)
}
