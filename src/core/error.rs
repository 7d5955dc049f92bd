//! Submission errors

use thiserror::Error;

/// Errors surfaced by the submission processors
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No line matched any rule
    #[error("all the lines are invalid or the lines input is empty")]
    NoValidLines,

    /// A collaborator call failed
    #[error("transport failure: {0:#}")]
    Transport(#[from] anyhow::Error),
}
