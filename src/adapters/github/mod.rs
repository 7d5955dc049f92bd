//! GitHub issue tracker
//!
//! Implements `IssueTracker` over the GitHub REST API for a single issue.

use anyhow::Context;
use log::debug;
use reqwest::{Client, RequestBuilder, header};

use crate::core::ports::{IssueTracker, IssueUpdate};

/// GitHub REST API media type
const ACCEPT: &str = "application/vnd.github+json";

/// GitHub rejects requests without a user agent
const USER_AGENT: &str = concat!("plugreq/", env!("CARGO_PKG_VERSION"));

/// One issue in a GitHub repository
#[derive(Debug, Clone)]
pub struct GitHubIssues {
    client: Client,
    api_url: String,
    repo: String,
    number: u64,
    token: Option<String>,
}

impl GitHubIssues {
    /// Create a tracker for `owner/name` issue `number`
    pub fn new(
        api_url: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
        token: Option<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            repo: repo.into(),
            number,
            token,
        })
    }

    fn issue_url(&self, suffix: &str) -> String {
        format!("{}/repos/{}/issues/{}{suffix}", self.api_url, self.repo, self.number)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(header::ACCEPT, ACCEPT);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, what: &str, request: RequestBuilder) -> anyhow::Result<()> {
        debug!("{what} on {}#{}", self.repo, self.number);
        self.authorized(request)
            .send()
            .await
            .with_context(|| format!("failed to {what}"))?
            .error_for_status()
            .with_context(|| format!("failed to {what}"))?;
        Ok(())
    }
}

impl IssueTracker for GitHubIssues {
    async fn create_comment(&self, body: &str) -> anyhow::Result<()> {
        let request = self
            .client
            .post(self.issue_url("/comments"))
            .json(&serde_json::json!({ "body": body }));
        self.send("comment", request).await
    }

    async fn update(&self, update: &IssueUpdate) -> anyhow::Result<()> {
        let request = self.client.patch(self.issue_url("")).json(update);
        self.send("update issue", request).await
    }

    async fn lock(&self) -> anyhow::Result<()> {
        let request = self.client.put(self.issue_url("/lock")).header(header::CONTENT_LENGTH, 0);
        self.send("lock issue", request).await
    }
}
