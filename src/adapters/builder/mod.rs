//! HTTP plugin builder
//!
//! Implements `BuildService` by POSTing the request body to the builder's
//! endpoint and returning the response body as the archive.

use anyhow::Context;
use log::debug;
use reqwest::{Client, header};

use crate::core::models::BuildRequest;
use crate::core::ports::BuildService;

/// Builder service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBuildService {
    client: Client,
    base_url: String,
}

impl HttpBuildService {
    /// Create a client for a builder base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of a request's endpoint
    #[must_use]
    pub fn url_for(&self, request: &BuildRequest) -> String {
        format!("{}/{}", self.base_url, request.endpoint)
    }
}

impl BuildService for HttpBuildService {
    async fn build(&self, request: &BuildRequest) -> anyhow::Result<Vec<u8>> {
        let url = self.url_for(request);
        debug!("POST {url} ({} bytes)", request.body.len());

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, request.content_type)
            .body(request.body.clone())
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?
            .error_for_status()
            .with_context(|| format!("builder rejected request to {url}"))?;

        let bytes = response.bytes().await.context("failed to read plugin archive")?;
        Ok(bytes.to_vec())
    }
}
