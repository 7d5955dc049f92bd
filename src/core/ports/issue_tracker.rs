//! Issue tracker port
//!
//! Defines the calls the moderation flow makes against the tracker that
//! holds a plugin request issue.

use serde::{Deserialize, Serialize};

/// Issue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Open issue
    Open,
    /// Closed issue
    Closed,
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Partial issue update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUpdate {
    /// New state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    /// Replacement label list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Replacement body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// The issue a moderation run acts on
///
/// Each call is an independent remote operation on that one issue.
pub trait IssueTracker {
    /// Post a comment
    async fn create_comment(&self, body: &str) -> anyhow::Result<()>;

    /// Update state, labels or body
    async fn update(&self, update: &IssueUpdate) -> anyhow::Result<()>;

    /// Lock the conversation
    async fn lock(&self) -> anyhow::Result<()>;
}
