//! HTTP client for the Yiffer API.

use crate::error::{Result, YifferError};
use reqwest::Client;
use shared::YifferConfig;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Yiffer API client
///
/// Executes one GET per call and hands back the raw body. Decoding is left to
/// the mapper so it can be exercised without a network.
#[derive(Debug, Clone)]
pub struct YifferClient {
    /// HTTP client
    client: Client,
    /// Base URL for the JSON API
    base_url: String,
    /// Base URL for thumbnails and page images
    static_base_url: String,
}

impl YifferClient {
    /// Create a new client with its own HTTP client built from the config
    pub fn new(config: &YifferConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(YifferError::Client)?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an HTTP client supplied by the host
    pub fn with_client(client: Client, config: &YifferConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            static_base_url: config.static_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn static_base_url(&self) -> &str {
        &self.static_base_url
    }

    /// GET a URL and read the whole body as text
    ///
    /// Non-success statuses are errors; the response is consumed on every path.
    pub async fn get_text(&self, url: Url) -> Result<String> {
        let url_str = url.to_string();
        debug!(url = %url_str, "Making API request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| YifferError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url_str, status = %status, "Request failed");
            return Err(YifferError::Status {
                url: url_str,
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| YifferError::Transport {
                url: url_str.clone(),
                source,
            })?;

        debug!(url = %url_str, bytes = body.len(), "Request successful");
        Ok(body)
    }
}
