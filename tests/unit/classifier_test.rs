//! Tests for the line classifier

use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::models::{Flavor, LineSeparator, Outcome, Rule, RuleSet};
use plugreq::core::services::{classify, classify_text};

fn foo_rules() -> RuleSet {
    RuleSet::new(Flavor::Custom, vec![Rule::new("foo", "^foo$")])
}

mod partition {
    use super::*;

    #[test]
    fn keeps_matches_and_collects_the_rest() {
        let result = classify(["foo", "bar", "foo"], &foo_rules());
        assert_eq!(result.kept, vec!["foo", "foo"]);
        assert_eq!(result.useless, vec!["bar"]);
        assert_eq!(result.outcome(), Outcome::EditedWithWarnings);
    }

    #[test]
    fn all_kept_is_accepted() {
        let result = classify(["foo"], &foo_rules());
        assert!(result.useless.is_empty());
        assert_eq!(result.outcome(), Outcome::Accepted);
    }

    #[test]
    fn nothing_kept_is_invalid() {
        let result = classify(["bar", "baz"], &foo_rules());
        assert!(result.kept.is_empty());
        assert_eq!(result.outcome(), Outcome::Invalid);
    }

    #[test]
    fn empty_rule_set_keeps_nothing() {
        let rules = RuleSet::new(Flavor::Custom, Vec::new());
        let result = classify(["anything"], &rules);
        assert_eq!(result.useless, vec!["anything"]);
    }
}

mod separators {
    use super::*;

    #[test]
    fn empty_text_is_one_empty_line() {
        let result = classify_text("", LineSeparator::Lf, &foo_rules());
        assert_eq!(result.total(), 1);
        assert_eq!(result.useless, vec![""]);
        assert_eq!(result.outcome(), Outcome::Invalid);
    }

    #[test]
    fn crlf_split_leaves_lone_newlines_inside_lines() {
        let result = classify_text("foo\nfoo", LineSeparator::Crlf, &foo_rules());
        assert_eq!(result.useless, vec!["foo\nfoo"]);
    }

    #[test]
    fn lf_split_leaves_carriage_returns_on_lines() {
        let result = classify_text("foo\r\nfoo", LineSeparator::Lf, &foo_rules());
        assert_eq!(result.kept, vec!["foo"]);
        assert_eq!(result.useless, vec!["foo\r"]);
    }

    #[test]
    fn trailing_separator_adds_empty_line() {
        let result = classify_text("foo\r\n", LineSeparator::Crlf, &foo_rules());
        assert_eq!(result.kept, vec!["foo"]);
        assert_eq!(result.useless, vec![""]);
    }
}

mod settings {
    use super::*;

    #[test]
    fn recognizes_known_directives() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let result = classify(
            ["use_cpu_jit = false", "volume = 0.25", "resolution_factor = 2"],
            &rules,
        );
        assert_eq!(result.outcome(), Outcome::Accepted);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let result = classify(
            ["hello", "use_cpu_jit = maybe", "volume = 2.5", " use_cpu_jit = true"],
            &rules,
        );
        assert_eq!(result.kept.len(), 0);
        assert_eq!(result.useless.len(), 4);
    }

    #[test]
    fn line_breaks_inside_a_piece_make_it_useless() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let body = "volume\n=\n0.5\r\nuse_cpu_jit\r=\rtrue\r\n\
                    button_a = \"code:65\nengine:keyboard\"\r\nvolume = 0.5";

        let result = classify_text(body, LineSeparator::Crlf, &rules);

        assert_eq!(result.kept, vec!["volume = 0.5"]);
        assert_eq!(
            result.useless,
            vec![
                "volume\n=\n0.5",
                "use_cpu_jit\r=\rtrue",
                "button_a = \"code:65\nengine:keyboard\""
            ]
        );
    }

    #[test]
    fn both_flows_agree_on_normalized_text() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let moderated = classify_text(
            "use_cpu_jit\n= true\r\nvolume = 0.5\r\nhi",
            LineSeparator::Crlf,
            &rules,
        );

        let resubmitted = classify_text(&moderated.normalized(), LineSeparator::Lf, &rules);

        assert_eq!(resubmitted.kept, moderated.kept);
        assert!(resubmitted.useless.is_empty());
    }

    #[test]
    fn match_only_records_no_extractions() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let result = classify(["use_cpu_jit = false"], &rules);
        assert!(result.extractions.is_empty());
    }

    #[test]
    fn extract_mode_records_setter_calls_in_order() {
        let rules = catalog::custom_default_settings(CollectMode::Extract);
        let result = classify(["volume = 0.5", "junk", "use_cpu_jit = false"], &rules);

        let names: Vec<&str> = result.extractions.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["vvctre_settings_set_volume", "vvctre_settings_set_use_cpu_jit"]
        );
        assert_eq!(result.extractions[0].value_type, "float");
        assert_eq!(result.extractions[1].call, "vvctre_settings_set_use_cpu_jit(false);");
    }
}
