//! Rule table builders
//!
//! Turn the static catalogs into ordered [`RuleSet`]s. Building only
//! assembles patterns; nothing is evaluated until lines are classified.
//!
//! - [`custom_default_settings`] - `key = value` setting directives
//! - [`input_params`] - serialized input device parameters

mod params;
mod settings;

pub use settings::{SETTER_PREFIX, SETTINGS, SettingSpec};

use crate::core::models::{Extractor, Flavor, Rule, RuleSet};

/// Whether rules record extraction data for matched lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectMode {
    /// Membership testing only
    #[default]
    MatchOnly,
    /// Record a `(name, type, call)` triple per matched line
    Extract,
}

/// Build the custom default settings rule set
#[must_use]
pub fn custom_default_settings(mode: CollectMode) -> RuleSet {
    let rules = SETTINGS
        .iter()
        .map(|spec| {
            let rule = Rule::directive(spec.key, spec.syntax);
            match mode {
                CollectMode::MatchOnly => rule,
                CollectMode::Extract => rule.with_extractor(Extractor::new(
                    format!("{SETTER_PREFIX}{}", spec.key),
                    spec.c_type,
                )),
            }
        })
        .collect();

    RuleSet::new(Flavor::Settings, rules)
}

/// Build the input parameters rule set used by button to touch requests
#[must_use]
pub fn input_params() -> RuleSet {
    let rules = params::INPUT_PARAMS.iter().map(|(id, pattern)| Rule::new(*id, pattern)).collect();
    RuleSet::new(Flavor::InputParams, rules)
}

/// Build the rule set for a flavor
///
/// Hand-built rule sets have no catalog, so [`Flavor::Custom`] yields an
/// empty set.
#[must_use]
pub fn for_flavor(flavor: Flavor, mode: CollectMode) -> RuleSet {
    match flavor {
        Flavor::Settings => custom_default_settings(mode),
        Flavor::InputParams => input_params(),
        Flavor::Custom => RuleSet::new(Flavor::Custom, Vec::new()),
    }
}
