//! Moderate a plugin request issue

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use serde::Deserialize;

use plugreq::adapters::{FileMarkerWriter, GitHubIssues};
use plugreq::config::Config;
use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::services::{Moderator, review};
use plugreq::output::{ModerateResult, OutputMode};

use super::block_on;

/// Environment variable pointing at the triggering event payload
const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// Arguments for `plugreq moderate`
#[derive(Debug)]
pub struct ModerateArgs {
    /// Event payload path
    pub event: Option<PathBuf>,
    /// Repository override
    pub repo: Option<String>,
    /// Issue number override
    pub issue: Option<u64>,
    /// Body file override
    pub body_file: Option<PathBuf>,
    /// Marker directory override
    pub marker_dir: Option<PathBuf>,
    /// Plan only
    pub dry_run: bool,
}

#[derive(Debug, Default, Deserialize)]
struct Event {
    #[serde(default)]
    issue: Option<EventIssue>,
    #[serde(default)]
    repository: Option<EventRepository>,
}

#[derive(Debug, Deserialize)]
struct EventIssue {
    number: u64,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventRepository {
    full_name: String,
}

fn read_event(path: &Path) -> anyhow::Result<Event> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid event in {}", path.display()))
}

/// Classify an issue body and apply the moderation actions
pub fn moderate(config: &Config, args: ModerateArgs, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let event_path = args
        .event
        .or_else(|| std::env::var_os(EVENT_PATH_ENV).map(PathBuf::from));
    let event = match &event_path {
        Some(path) => read_event(path)?,
        None => Event::default(),
    };

    let body = match &args.body_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => event
            .issue
            .as_ref()
            .map(|issue| issue.body.clone().unwrap_or_default())
            .context("no issue body: pass --body-file or an issue event")?,
    };

    let docs_url = &config.docs.url;

    if args.dry_run {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let report = review(&body, &rules, docs_url);
        ModerateResult {
            dry_run: true,
            report,
        }
        .render(mode);
        return Ok(ExitCode::SUCCESS);
    }

    let repo = args
        .repo
        .or_else(|| event.repository.map(|r| r.full_name))
        .context("no repository: pass --repo or an issue event")?;
    let number = args
        .issue
        .or_else(|| event.issue.as_ref().map(|issue| issue.number))
        .context("no issue number: pass --issue or an issue event")?;

    let tracker =
        GitHubIssues::new(&config.endpoints.github_api_url, repo, number, config.token())?;
    let markers = FileMarkerWriter::new(
        args.marker_dir
            .unwrap_or_else(|| config.moderation.marker_dir.clone()),
    );
    let moderator = Moderator::new(&tracker, &markers, docs_url);

    let report = block_on(moderator.moderate(&body))??;
    ModerateResult {
        dry_run: false,
        report,
    }
    .render(mode);
    Ok(ExitCode::SUCCESS)
}
