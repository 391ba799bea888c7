use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("source returned HTTP {status}")]
    Status { status: u16 },
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}

// --- PageFetcher trait ---

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
    fn name(&self) -> &str;
}

// --- Plain HTTP fetcher ---

/// Fetches the listing page over plain HTTP. The source renders its article
/// list server-side, so no JS execution is needed.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            user_agent: user_agent.to_string(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let html = resp.text().await.map_err(FetchError::Body)?;
        info!(url, bytes = html.len(), "Fetched source page");
        Ok(html)
    }

    fn name(&self) -> &str {
        "http"
    }
}
