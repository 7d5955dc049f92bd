//! Print the C source of a settings plugin

use std::process::ExitCode;

use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::services::{normalize_settings, render_plugin_source};

use super::read_input;

/// Render the plugin source for a settings input
pub fn source(input: &str) -> anyhow::Result<ExitCode> {
    let text = read_input(input)?;
    let rules = catalog::custom_default_settings(CollectMode::Extract);
    let classification = normalize_settings(&text, &rules)?;

    print!("{}", render_plugin_source(&classification.extractions));
    Ok(ExitCode::SUCCESS)
}
