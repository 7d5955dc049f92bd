//! Classify lines against a rule set

use std::process::ExitCode;

use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::models::{Flavor, LineSeparator, Outcome};
use plugreq::core::services::classify_text;
use plugreq::output::{CheckResult, OutputMode};

use super::read_input;

/// Classify an input and report kept and useless lines
///
/// Exits with failure when no line is recognized.
pub fn check(input: &str, flavor: Flavor, crlf: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let text = read_input(input)?;
    let separator = if crlf {
        LineSeparator::Crlf
    } else {
        LineSeparator::Lf
    };

    let rules = catalog::for_flavor(flavor, CollectMode::Extract);
    let classification = classify_text(&text, separator, &rules);
    let result = CheckResult::new(flavor, classification);
    result.render(mode);

    Ok(if result.outcome == Outcome::Invalid {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
