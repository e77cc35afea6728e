//! Video search service client

use serde::Deserialize;

use crate::error::MediaError;

/// Search endpoint used when `SEARCH_API_URL` is not set
pub const DEFAULT_SEARCH_URL: &str = "https://api.privatezia.biz.id/api/search/yts";

/// One candidate video from a search
#[derive(Debug, Clone, Deserialize)]
pub struct VideoResult {
    pub title: String,
    /// Canonical watch URL
    pub url: String,
    #[serde(default)]
    pub author: Author,
    /// Relative upload age, e.g. "2 years ago"
    #[serde(default)]
    pub ago: String,
    /// Duration as displayed, e.g. "4:03"
    #[serde(default)]
    pub timestamp: String,
    /// Duration in seconds
    #[serde(default)]
    pub seconds: u64,
}

/// Channel that uploaded the video
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    videos: Vec<VideoResult>,
}

/// Wrapper around the free-text video search API
#[derive(Debug, Clone)]
pub struct SearchApi {
    client: reqwest::Client,
    base_url: String,
}

impl SearchApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        SearchApi {
            client,
            base_url: base_url.into(),
        }
    }

    /// Endpoint from `SEARCH_API_URL`, falling back to the default service
    pub fn from_env(client: reqwest::Client) -> Self {
        let base_url =
            std::env::var("SEARCH_API_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());
        Self::new(client, base_url)
    }

    /// Run a free-text search and return the candidate videos, best match first.
    ///
    /// An empty list is a valid answer; callers decide what "nothing found"
    /// means to the user.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoResult>, MediaError> {
        let url = format!("{}?q={}", self.base_url, urlencoding::encode(query));
        tracing::info!("searching videos for {:?}", query);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            tracing::error!("search request failed: {}", resp.status());
            return Err(MediaError::Status(resp.status()));
        }

        let body: SearchResponse = resp.json().await?;
        Ok(body.videos)
    }
}
