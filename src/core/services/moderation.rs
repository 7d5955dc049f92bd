//! Moderation flow for plugin request issues
//!
//! An issue body is classified line by line. Depending on the [`Outcome`]
//! the issue is rejected, left alone, or edited down to its kept lines. The
//! side effects are planned as plain [`ModerationAction`] values first, so a
//! dry run can show them without calling anything.

use log::{info, warn};
use serde::Serialize;

use crate::core::catalog::{self, CollectMode};
use crate::core::error::SubmissionError;
use crate::core::models::{Classification, LineSeparator, Marker, Outcome, RuleSet};
use crate::core::ports::{IssueState, IssueTracker, IssueUpdate, MarkerWriter};
use crate::core::services::classifier::classify_text;

/// Label applied to rejected requests
pub const INVALID_LABEL: &str = "Invalid";

/// One side effect of a moderation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ModerationAction {
    /// Comment on the issue
    Comment {
        /// Comment text
        body: String,
    },
    /// Update the issue
    Update {
        /// Fields to change
        update: IssueUpdate,
    },
    /// Lock the issue
    Lock,
    /// Write an outcome marker
    WriteMarker {
        /// Marker to write
        marker: Marker,
    },
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comment { body } => {
                let first = body.lines().next().unwrap_or_default();
                write!(f, "comment: {first}")
            },
            Self::Update { update } => {
                let mut parts = Vec::new();
                if let Some(state) = update.state {
                    parts.push(format!("state={state}"));
                }
                if let Some(labels) = &update.labels {
                    parts.push(format!("labels=[{}]", labels.join(", ")));
                }
                if let Some(body) = &update.body {
                    parts.push(format!("body={} line(s)", body.lines().count()));
                }
                write!(f, "update: {}", parts.join(" "))
            },
            Self::Lock => write!(f, "lock"),
            Self::WriteMarker { marker } => write!(f, "marker: {marker}"),
        }
    }
}

/// Result of a moderation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModerationReport {
    /// Outcome of the classification
    pub outcome: Outcome,
    /// Lines that remain in the request
    pub kept: Vec<String>,
    /// Lines removed from the request
    pub removed: Vec<String>,
    /// Side effects, in execution order
    pub actions: Vec<ModerationAction>,
}

/// Comment posted on rejected requests
#[must_use]
pub fn rejection_comment(docs_url: &str) -> String {
    format!("Read {docs_url}")
}

/// Comment listing the lines removed from an edited request
#[must_use]
pub fn removal_comment(useless: &[String], docs_url: &str) -> String {
    format!(
        "Useless lines removed:\n```\n{}\n```\n\nLines that aren't in {docs_url} are useless lines.",
        useless.join("\n")
    )
}

/// Plan the side effects for a classified issue body
///
/// Rejections comment, close, lock and mark `invalid`. Edits replace the
/// body, explain the removal and mark `edited`. Accepted requests have no
/// side effects.
#[must_use]
pub fn plan_moderation(classification: &Classification, docs_url: &str) -> Vec<ModerationAction> {
    match classification.outcome() {
        Outcome::Invalid => vec![
            ModerationAction::Comment {
                body: rejection_comment(docs_url),
            },
            ModerationAction::Update {
                update: IssueUpdate {
                    state: Some(IssueState::Closed),
                    labels: Some(vec![INVALID_LABEL.to_string()]),
                    body: Some(INVALID_LABEL.to_string()),
                },
            },
            ModerationAction::Lock,
            ModerationAction::WriteMarker {
                marker: Marker::Invalid,
            },
        ],
        Outcome::EditedWithWarnings => vec![
            ModerationAction::Update {
                update: IssueUpdate {
                    body: Some(classification.normalized()),
                    ..IssueUpdate::default()
                },
            },
            ModerationAction::Comment {
                body: removal_comment(&classification.useless, docs_url),
            },
            ModerationAction::WriteMarker {
                marker: Marker::Edited,
            },
        ],
        Outcome::Accepted => Vec::new(),
    }
}

/// Classify an issue body and plan its moderation without side effects
#[must_use]
pub fn review(body: &str, rules: &RuleSet, docs_url: &str) -> ModerationReport {
    let classification = classify_text(body, LineSeparator::Crlf, rules);
    let actions = plan_moderation(&classification, docs_url);

    ModerationReport {
        outcome: classification.outcome(),
        kept: classification.kept,
        removed: classification.useless,
        actions,
    }
}

/// Moderates plugin request issues through an issue tracker
#[derive(Debug)]
pub struct Moderator<'a, T, M> {
    tracker: &'a T,
    markers: &'a M,
    rules: RuleSet,
    docs_url: String,
}

impl<'a, T: IssueTracker, M: MarkerWriter> Moderator<'a, T, M> {
    /// Create a moderator using the settings catalog
    #[must_use]
    pub fn new(tracker: &'a T, markers: &'a M, docs_url: impl Into<String>) -> Self {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        Self::with_rules(tracker, markers, rules, docs_url)
    }

    /// Create a moderator with a specific rule set
    #[must_use]
    pub fn with_rules(
        tracker: &'a T,
        markers: &'a M,
        rules: RuleSet,
        docs_url: impl Into<String>,
    ) -> Self {
        Self {
            tracker,
            markers,
            rules,
            docs_url: docs_url.into(),
        }
    }

    /// Moderate an issue body
    ///
    /// Actions run strictly in order. The first failing call stops the run
    /// and is returned as [`SubmissionError::Transport`]; later actions,
    /// including the marker, are not attempted.
    pub async fn moderate(&self, body: &str) -> Result<ModerationReport, SubmissionError> {
        let report = review(body, &self.rules, &self.docs_url);

        match report.outcome {
            Outcome::Invalid => info!("request rejected: no recognized lines"),
            Outcome::EditedWithWarnings => {
                warn!("removing {} useless line(s) from request", report.removed.len());
            },
            Outcome::Accepted => info!("request accepted with {} line(s)", report.kept.len()),
        }

        for action in &report.actions {
            self.execute(action).await?;
        }

        Ok(report)
    }

    async fn execute(&self, action: &ModerationAction) -> Result<(), SubmissionError> {
        match action {
            ModerationAction::Comment { body } => self.tracker.create_comment(body).await?,
            ModerationAction::Update { update } => self.tracker.update(update).await?,
            ModerationAction::Lock => self.tracker.lock().await?,
            ModerationAction::WriteMarker { marker } => self.markers.write(*marker)?,
        }
        Ok(())
    }
}
