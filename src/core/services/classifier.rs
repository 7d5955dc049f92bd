//! Line classifier - partitions lines into kept and useless
//!
//! This module contains pure matching logic with no I/O dependencies.

use log::debug;

use crate::core::models::{Classification, LineSeparator, RuleSet};

/// Classify lines against a rule set
///
/// Lines are processed in order. A line is kept at the first rule that
/// matches it, and that rule alone contributes an extraction. Lines no rule
/// matches are useless. Duplicates are classified independently.
#[must_use]
pub fn classify<'a, I>(lines: I, rules: &RuleSet) -> Classification
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = Classification::default();

    for line in lines {
        if let Some(matched) = rules.evaluate(line) {
            result.extractions.extend(matched.extraction);
            result.kept.push(line.to_string());
        } else {
            result.useless.push(line.to_string());
        }
    }

    debug!(
        "classified {} line(s) against {} rules: {} kept, {} useless",
        result.total(),
        rules.flavor(),
        result.kept.len(),
        result.useless.len()
    );

    result
}

/// Split text with a separator convention and classify the lines
#[must_use]
pub fn classify_text(text: &str, separator: LineSeparator, rules: &RuleSet) -> Classification {
    classify(separator.split(text), rules)
}
