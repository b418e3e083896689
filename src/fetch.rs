//! Page retrieval over HTTP
//!
//! The pipeline only needs "give me the body of this URL", so fetching
//! sits behind [`PageFetcher`] and tests can swap in canned pages.

use crate::config::Config;
use crate::error::{AnswerError, Result};
use reqwest::Client;
use std::future::Future;
use tracing::debug;

/// Something that can turn a URL into page text
pub trait PageFetcher {
    /// Fetch the body of `url` as text
    ///
    /// Non-success statuses must be reported as [`AnswerError::Status`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client using the configured user agent
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| AnswerError::Request {
                url: config.search_url.clone(),
                source,
            })?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnswerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport_error(url, e))
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> AnswerError {
    let url = url.to_string();
    if source.is_connect() {
        AnswerError::Connection { url, source }
    } else {
        AnswerError::Request { url, source }
    }
}
