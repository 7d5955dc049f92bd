//! List request kinds

use std::process::ExitCode;

use plugreq::output::{KindsResult, OutputMode};

/// List request kinds with their endpoints and form fields
#[allow(clippy::unnecessary_wraps)]
pub fn kinds(mode: OutputMode) -> anyhow::Result<ExitCode> {
    KindsResult::all().render(mode);
    Ok(ExitCode::SUCCESS)
}
