//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Classification, Extraction, Flavor, Outcome, RequestKind};
use crate::core::services::{ModerationAction, ModerationReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn outcome_label(outcome: Outcome) -> colored::ColoredString {
    match outcome {
        Outcome::Invalid => "INVALID".red().bold(),
        Outcome::EditedWithWarnings => "EDITED".yellow().bold(),
        Outcome::Accepted => "ACCEPTED".green().bold(),
    }
}

/// Result of a check operation
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Rule set flavor used
    pub flavor: Flavor,
    /// Outcome implied by the partition
    pub outcome: Outcome,
    /// Kept lines
    pub kept: Vec<String>,
    /// Useless lines
    pub useless: Vec<String>,
    /// Extracted setter calls
    pub extractions: Vec<Extraction>,
}

impl CheckResult {
    /// Build from a classification
    #[must_use]
    pub fn new(flavor: Flavor, classification: Classification) -> Self {
        Self {
            flavor,
            outcome: classification.outcome(),
            kept: classification.kept,
            useless: classification.useless,
            extractions: classification.extractions,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "Checked {} line(s) against {} rules: {}\n",
            self.kept.len() + self.useless.len(),
            self.flavor,
            outcome_label(self.outcome)
        );

        if !self.kept.is_empty() {
            println!("Kept:");
            for line in &self.kept {
                println!("  {} {line}", "+".green());
            }
            println!();
        }

        if !self.useless.is_empty() {
            println!("Useless:");
            for line in &self.useless {
                println!("  {} {line}", "-".red());
            }
            println!();
        }

        if !self.extractions.is_empty() {
            println!("Calls:");
            for extraction in &self.extractions {
                println!("  {}", extraction.call);
            }
        }
    }
}

/// Result of a moderation run
#[derive(Debug, Serialize)]
pub struct ModerateResult {
    /// Whether the actions were only planned
    pub dry_run: bool,
    /// Moderation report
    #[serde(flatten)]
    pub report: ModerationReport,
}

impl ModerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Request {}", outcome_label(self.report.outcome));

        if !self.report.removed.is_empty() {
            println!("\nRemoved lines:");
            for line in &self.report.removed {
                println!("  {} {line}", "-".red());
            }
        }

        if self.report.actions.is_empty() {
            println!("\nNo changes needed.");
            return;
        }

        let heading = if self.dry_run { "Planned actions" } else { "Actions" };
        println!("\n{heading}:");
        for action in &self.report.actions {
            println!("  {}", action_line(action));
        }
    }
}

fn action_line(action: &ModerationAction) -> String {
    match action {
        ModerationAction::Lock => action.to_string().bold().to_string(),
        _ => action.to_string(),
    }
}

/// Result of a make operation
#[derive(Debug, Serialize)]
pub struct MakeResult {
    /// Kind of plugin built
    pub kind: RequestKind,
    /// Where the archive was saved
    pub output: String,
    /// Archive size in bytes
    pub bytes: usize,
    /// Number of setter calls in a settings plugin
    pub calls: usize,
}

impl MakeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "{} {} plugin saved to {} ({} bytes)",
                    "Built".green().bold(),
                    self.kind,
                    self.output,
                    self.bytes
                );
                if self.calls > 0 {
                    println!("Settings applied: {}", self.calls);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// A request kind and the form fields it uses
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KindInfo {
    /// Kind name
    pub kind: RequestKind,
    /// Builder endpoint
    pub endpoint: &'static str,
    /// Form fields
    pub fields: &'static [&'static str],
}

/// Result of listing request kinds
#[derive(Debug, Serialize)]
pub struct KindsResult {
    /// Known kinds
    pub kinds: Vec<KindInfo>,
}

impl KindsResult {
    /// Describe every request kind
    #[must_use]
    pub fn all() -> Self {
        let kinds = RequestKind::ALL
            .iter()
            .map(|&kind| KindInfo {
                kind,
                endpoint: kind.endpoint(),
                fields: kind.fields(),
            })
            .collect();
        Self { kinds }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for info in &self.kinds {
                    println!("{}", info.endpoint.bold());
                    for field in info.fields {
                        println!("  {field}");
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
