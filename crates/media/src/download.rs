//! Audio downloads and temporary-file handling

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::MediaError;

/// Longest allowed sanitized title stem
pub const MAX_TITLE_LEN: usize = 100;

/// Reduce a track title to a filesystem-safe stem.
///
/// Keeps ASCII alphanumerics and underscores, drops everything else, and
/// collapses whitespace runs into single underscores. The stem is truncated
/// to [`MAX_TITLE_LEN`] characters.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(MAX_TITLE_LEN)
        .collect()
}

/// Build a collision-free `.mp3` file name for a download.
///
/// Two concurrent requests for the same track must not race on one path, so
/// the sanitized stem gets a millisecond-timestamp token appended.
pub fn unique_file_name(title: &str) -> String {
    let stem = sanitize_title(title);
    let token = chrono::Utc::now().timestamp_millis();
    if stem.is_empty() {
        format!("audio_{}.mp3", token)
    } else {
        format!("{}_{}.mp3", stem, token)
    }
}

/// Stream `url` into the file at `path`, returning the bytes written.
///
/// The file is only created after the response status checks out, so a
/// failed request leaves nothing behind.
pub async fn download_to_file(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<u64, MediaError> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        tracing::error!("download responded with status: {}", resp.status());
        return Err(MediaError::Status(resp.status()));
    }

    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = resp.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    tracing::info!("downloaded {} bytes to {}", written, path.display());
    Ok(written)
}

/// Delete `path` after `delay`, if it still exists.
///
/// Best effort: failures are logged, never surfaced.
pub fn schedule_cleanup(path: PathBuf, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!("deleted temp file: {}", path.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!("temp file cleanup failed for {}: {}", path.display(), err)
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        // Punctuation stripped, spaces become single underscores
        assert_eq!(
            sanitize_title("Song: Title! (Live) @2024"),
            "Song_Title_Live_2024"
        );
        // Whitespace runs collapse
        assert_eq!(sanitize_title("a   b\t\tc"), "a_b_c");
        // Already-safe input passes through
        assert_eq!(sanitize_title("Hello_World 99"), "Hello_World_99");
        // Non-ASCII is dropped
        assert_eq!(sanitize_title("naïve café"), "nave_caf");
        // Symbol-only input collapses to nothing
        assert_eq!(sanitize_title("!!! ??? ***"), "");
    }

    #[test]
    fn test_sanitize_title_truncates() {
        let long = "a".repeat(250);
        assert_eq!(sanitize_title(&long).len(), MAX_TITLE_LEN);
    }

    #[test]
    fn test_unique_file_name_shape() {
        let name = unique_file_name("Song: Title! (Live) @2024");
        assert!(name.starts_with("Song_Title_Live_2024_"));
        assert!(name.ends_with(".mp3"));

        // The token between stem and extension is a numeric timestamp
        let token = name
            .trim_start_matches("Song_Title_Live_2024_")
            .trim_end_matches(".mp3");
        assert!(token.parse::<i64>().is_ok());
    }

    #[test]
    fn test_unique_file_name_empty_title() {
        let name = unique_file_name("!!!");
        assert!(name.starts_with("audio_"));
        assert!(name.ends_with(".mp3"));
    }
}
