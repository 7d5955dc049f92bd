//! Tests for output structures

use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::models::{Flavor, LineSeparator, RequestKind};
use plugreq::core::services::{classify_text, review};
use plugreq::output::{CheckResult, KindsResult, ModerateResult};

#[test]
fn check_result_serializes_partition() {
    let rules = catalog::custom_default_settings(CollectMode::Extract);
    let classification = classify_text("use_cpu_jit = false\nhi", LineSeparator::Lf, &rules);
    let result = CheckResult::new(Flavor::Settings, classification);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["flavor"], "settings");
    assert_eq!(json["outcome"], "edited_with_warnings");
    assert_eq!(json["kept"], serde_json::json!(["use_cpu_jit = false"]));
    assert_eq!(json["useless"], serde_json::json!(["hi"]));
    assert_eq!(json["extractions"][0]["type"], "bool");
}

#[test]
fn moderate_result_flattens_report() {
    let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
    let result = ModerateResult {
        dry_run: true,
        report: review("use_cpu_jit = false", &rules, "https://docs.test"),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["outcome"], "accepted");
    assert_eq!(json["actions"], serde_json::json!([]));
}

#[test]
fn kinds_cover_every_request_kind() {
    let kinds = KindsResult::all();
    assert_eq!(kinds.kinds.len(), RequestKind::ALL.len());

    let first = kinds.kinds[0];
    assert_eq!(first.kind, RequestKind::CustomDefaultSettings);
    assert_eq!(first.fields, RequestKind::CustomDefaultSettings.fields());

    let endpoints: Vec<&str> = kinds.kinds.iter().map(|k| k.endpoint).collect();
    assert_eq!(
        endpoints,
        vec![
            "custom-default-settings",
            "button-to-touch",
            "window-size",
            "window-position",
            "log-file"
        ]
    );
}
