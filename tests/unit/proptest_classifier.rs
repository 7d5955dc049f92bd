//! Property-based tests for the classifier
//!
//! Uses proptest to verify properties that should hold for all inputs.

use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::models::{Flavor, LineSeparator, Rule, RuleSet};
use plugreq::core::services::{classify, classify_text};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("use_cpu_jit = false".to_string()),
        Just("volume = 0.5".to_string()),
        Just(r#"button_a = "code:65,engine:keyboard""#.to_string()),
        "[a-z_ =.0-9]{0,24}",
    ]
}

proptest! {
    /// Every line lands in exactly one bucket, in its original order
    #[test]
    fn partition_is_complete(lines in prop::collection::vec(line(), 0..12)) {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let result = classify(lines.iter().map(String::as_str), &rules);

        prop_assert_eq!(result.total(), lines.len());
        let kept: Vec<&String> = lines.iter().filter(|l| rules.first_match(l).is_some()).collect();
        let useless: Vec<&String> = lines.iter().filter(|l| rules.first_match(l).is_none()).collect();
        prop_assert_eq!(result.kept.iter().collect::<Vec<_>>(), kept);
        prop_assert_eq!(result.useless.iter().collect::<Vec<_>>(), useless);
    }

    /// Classifying the normalized text keeps everything
    #[test]
    fn normalization_is_idempotent(lines in prop::collection::vec(line(), 1..12)) {
        let rules = catalog::custom_default_settings(CollectMode::Extract);
        let first = classify_text(&lines.join("\n"), LineSeparator::Lf, &rules);
        prop_assume!(!first.kept.is_empty());

        let second = classify_text(&first.normalized(), LineSeparator::Lf, &rules);
        prop_assert!(second.useless.is_empty());
        prop_assert_eq!(&second.kept, &first.kept);
        prop_assert_eq!(&second.extractions, &first.extractions);
    }

    /// The same input always classifies the same way
    #[test]
    fn classification_is_deterministic(lines in prop::collection::vec(line(), 0..12)) {
        let rules = catalog::custom_default_settings(CollectMode::Extract);
        let a = classify(lines.iter().map(String::as_str), &rules);
        let b = classify(lines.iter().map(String::as_str), &rules);
        prop_assert_eq!(a, b);
    }

    /// Extraction comes from the first matching rule only
    #[test]
    fn first_match_wins(value in 0u8..100) {
        let rules = RuleSet::new(
            Flavor::Custom,
            vec![
                Rule::new("first", r"^n=(?P<value>[0-9]+)$")
                    .with_extractor(plugreq::core::models::Extractor::new("first", "int")),
                Rule::new("second", r"^n=(?P<value>[0-9]+)$")
                    .with_extractor(plugreq::core::models::Extractor::new("second", "int")),
            ],
        );
        let line = format!("n={value}");
        let result = classify([line.as_str()], &rules);

        prop_assert_eq!(result.extractions.len(), 1);
        prop_assert_eq!(&result.extractions[0].call, &format!("first({value});"));
    }
}
