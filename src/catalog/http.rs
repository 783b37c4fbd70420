//! HTTP catalog transport using reqwest

use crate::catalog::CatalogService;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog service delivering requests over HTTP
pub struct HttpCatalogService {
    client: Client,
    endpoint: String,
}

impl HttpCatalogService {
    /// Create a service for the given endpoint URL
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let url = url::Url::parse(endpoint)
            .map_err(|e| Error::Parse(format!("invalid catalog URL '{endpoint}': {e}")))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: url.to_string(),
        })
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn send_request(&self, body: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "sending catalog request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/xml")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "catalog answered with error status");
            return Err(Error::Status(status.as_u16()));
        }

        let text = response.text().await?;
        debug!(bytes = text.len(), "received catalog response");
        Ok(text)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
