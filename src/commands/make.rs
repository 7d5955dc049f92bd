//! Request a plugin from the builder

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use plugreq::adapters::HttpBuildService;
use plugreq::config::Config;
use plugreq::core::SubmissionError;
use plugreq::core::models::PluginRequest;
use plugreq::core::services::{PluginMaker, SubmitOutcome};
use plugreq::output::{MakeResult, OutputMode};

use super::{block_on, read_input};
use crate::cli::MakeAction;

/// Build a plugin and save the archive
pub fn make(
    config: &Config,
    action: MakeAction,
    output: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let (mut request, rewrite) = match action {
        MakeAction::Settings { input, rewrite } => {
            let lines = read_input(&input)?;
            let target = (rewrite && input != "-").then(|| PathBuf::from(&input));
            (PluginRequest::CustomDefaultSettings { lines }, target)
        },
        MakeAction::ButtonToTouch { x, y, params } => {
            (PluginRequest::ButtonToTouch { x, y, params }, None)
        },
        MakeAction::WindowSize { width, height } => {
            (PluginRequest::WindowSize { width, height }, None)
        },
        MakeAction::WindowPosition { x, y } => (PluginRequest::WindowPosition { x, y }, None),
        MakeAction::LogFile { path } => (PluginRequest::LogFile { path }, None),
    };

    let maker = PluginMaker::new(HttpBuildService::new(&config.endpoints.build_url));
    let result = block_on(maker.submit(&mut request))?;

    // The input is normalized before the build call, so it is rewritten even if the build fails.
    if let (Some(path), PluginRequest::CustomDefaultSettings { lines }) = (&rewrite, &request)
        && !matches!(result, Err(SubmissionError::NoValidLines))
    {
        std::fs::write(path, lines)
            .with_context(|| format!("failed to rewrite {}", path.display()))?;
        info!("rewrote {}", path.display());
    }

    let submission = match result? {
        SubmitOutcome::Built(submission) => submission,
        SubmitOutcome::Busy => anyhow::bail!("a submission is already in progress"),
    };

    let output = output.unwrap_or_else(|| PathBuf::from(&config.make.archive_name));
    std::fs::write(&output, &submission.archive)
        .with_context(|| format!("failed to save {}", output.display()))?;

    MakeResult {
        kind: submission.kind,
        output: output.display().to_string(),
        bytes: submission.archive.len(),
        calls: submission.extractions.len(),
    }
    .render(mode);
    Ok(ExitCode::SUCCESS)
}
