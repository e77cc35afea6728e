//! Download-resolution API client
//!
//! Translates a video URL into a direct downloadable audio URL. The remote
//! contract is a single GET returning `{ status, result: { downloadUrl,
//! title, quality, duration } }`; anything short of a success status with a
//! non-empty download URL is an error. One attempt per call, no fallback.

use serde::Deserialize;

use crate::error::MediaError;

/// Resolver endpoint used when `RESOLVER_API_URL` is not set
pub const DEFAULT_RESOLVER_URL: &str = "https://api.privatezia.biz.id/api/downloader/ytmp3";

/// A resolved direct audio URL plus whatever metadata the API reported
#[derive(Debug, Clone)]
pub struct ResolvedAudio {
    pub download_url: String,
    pub title: Option<String>,
    pub quality: Option<String>,
    /// Duration in seconds
    pub duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ResolverResponse {
    #[serde(default)]
    status: bool,
    result: Option<ResolverResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolverResult {
    #[serde(default)]
    download_url: Option<String>,
    title: Option<String>,
    quality: Option<String>,
    duration: Option<u64>,
}

/// Wrapper around the download-resolution API
#[derive(Debug, Clone)]
pub struct ResolverApi {
    client: reqwest::Client,
    base_url: String,
}

impl ResolverApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        ResolverApi {
            client,
            base_url: base_url.into(),
        }
    }

    /// Endpoint from `RESOLVER_API_URL`, falling back to the default service
    pub fn from_env(client: reqwest::Client) -> Self {
        let base_url =
            std::env::var("RESOLVER_API_URL").unwrap_or_else(|_| DEFAULT_RESOLVER_URL.to_string());
        Self::new(client, base_url)
    }

    /// Resolve a video URL into a direct audio download URL.
    pub async fn resolve(&self, video_url: &str) -> Result<ResolvedAudio, MediaError> {
        let url = format!("{}?url={}", self.base_url, urlencoding::encode(video_url));
        tracing::info!("resolving download URL for {}", video_url);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            tracing::error!("resolver responded with status: {}", resp.status());
            return Err(MediaError::Status(resp.status()));
        }

        let body: ResolverResponse = resp.json().await?;
        if !body.status {
            return Err(MediaError::Rejected);
        }

        let result = body.result.ok_or(MediaError::MissingDownloadUrl)?;
        let download_url = result
            .download_url
            .filter(|u| !u.is_empty())
            .ok_or(MediaError::MissingDownloadUrl)?;

        Ok(ResolvedAudio {
            download_url,
            title: result.title,
            quality: result.quality,
            duration: result.duration,
        })
    }
}
