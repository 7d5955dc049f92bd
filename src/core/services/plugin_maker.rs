//! Interactive plugin maker
//!
//! Normalizes a [`PluginRequest`] and forwards it to a [`BuildService`].
//! Settings requests are filtered down to their recognized lines before
//! anything is sent; if none remain, submission is blocked.
//!
//! A maker runs one submission at a time. Its state moves
//! `Idle -> Submitting -> Idle`; a submit attempted while `Submitting` is a
//! no-op that reports [`SubmitOutcome::Busy`].

use std::cell::Cell;

use log::{debug, info, warn};

use crate::core::catalog::{self, CollectMode};
use crate::core::error::SubmissionError;
use crate::core::models::{
    BuildRequest, Classification, Extraction, LineSeparator, PluginRequest, RequestKind, RuleSet,
};
use crate::core::ports::BuildService;
use crate::core::services::classifier::classify_text;

/// Submission state of a maker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Ready to submit
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
}

/// A completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Kind of plugin built
    pub kind: RequestKind,
    /// Archive returned by the builder
    pub archive: Vec<u8>,
    /// Setter calls extracted from a settings request
    pub extractions: Vec<Extraction>,
    /// Number of lines dropped from a settings request
    pub dropped: usize,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request was built
    Built(Submission),
    /// Another submission was in flight; nothing was sent
    Busy,
}

/// Resets the maker to `Idle` however the submission ends
struct BusyGuard<'a>(&'a Cell<SubmitState>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(SubmitState::Idle);
    }
}

/// Filter a settings text down to its recognized lines
///
/// Returns the classification; [`Classification::normalized`] is the text
/// to submit. Fails with [`SubmissionError::NoValidLines`] when nothing is
/// recognized, including empty input.
pub fn normalize_settings(
    lines: &str,
    rules: &RuleSet,
) -> Result<Classification, SubmissionError> {
    let classification = classify_text(lines, LineSeparator::Lf, rules);
    if classification.kept.is_empty() {
        return Err(SubmissionError::NoValidLines);
    }
    Ok(classification)
}

/// Submits plugin requests to a builder, one at a time
#[derive(Debug)]
pub struct PluginMaker<B> {
    service: B,
    settings: RuleSet,
    params: RuleSet,
    state: Cell<SubmitState>,
}

impl<B: BuildService> PluginMaker<B> {
    /// Create an idle maker
    #[must_use]
    pub fn new(service: B) -> Self {
        Self {
            service,
            settings: catalog::custom_default_settings(CollectMode::Extract),
            params: catalog::input_params(),
            state: Cell::new(SubmitState::Idle),
        }
    }

    /// Current submission state
    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// The builder service
    pub const fn service(&self) -> &B {
        &self.service
    }

    /// Submit a request
    ///
    /// Settings requests are normalized in place: `lines` is replaced by the
    /// kept lines joined with `\n`, and dropped lines are not reported back.
    /// The maker returns to `Idle` on every path, including errors.
    pub async fn submit(
        &self,
        request: &mut PluginRequest,
    ) -> Result<SubmitOutcome, SubmissionError> {
        if self.state.get() == SubmitState::Submitting {
            debug!("submission already in flight, ignoring {}", request.kind());
            return Ok(SubmitOutcome::Busy);
        }
        self.state.set(SubmitState::Submitting);
        let _guard = BusyGuard(&self.state);

        let (extractions, dropped) = self.prepare(request)?;
        let build = BuildRequest::from(&*request);

        info!("requesting {} plugin", build.endpoint);
        let archive = self.service.build(&build).await?;
        info!("received {} byte archive", archive.len());

        Ok(SubmitOutcome::Built(Submission {
            kind: request.kind(),
            archive,
            extractions,
            dropped,
        }))
    }

    fn prepare(
        &self,
        request: &mut PluginRequest,
    ) -> Result<(Vec<Extraction>, usize), SubmissionError> {
        match request {
            PluginRequest::CustomDefaultSettings { lines } => {
                let classification = normalize_settings(lines, &self.settings)?;
                if !classification.useless.is_empty() {
                    warn!("dropping {} unrecognized line(s)", classification.useless.len());
                }
                *lines = classification.normalized();
                Ok((classification.extractions, classification.useless.len()))
            },
            PluginRequest::ButtonToTouch { params, .. } => {
                if self.params.first_match(params).is_none() {
                    warn!("unrecognized input parameters: {params}");
                }
                Ok((Vec::new(), 0))
            },
            _ => Ok((Vec::new(), 0)),
        }
    }
}
