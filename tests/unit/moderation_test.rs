//! Tests for the moderation flow

use plugreq::core::SubmissionError;
use plugreq::core::catalog::{self, CollectMode};
use plugreq::core::models::{Marker, Outcome};
use plugreq::core::ports::{IssueState, IssueUpdate};
use plugreq::core::services::{ModerationAction, Moderator, review};

use crate::common::mocks::{Call, MockIssueTracker, MockMarkerWriter};

const DOCS: &str = "https://example.test/docs";

mod actions {
    use super::*;

    #[tokio::test]
    async fn rejects_body_without_recognized_lines() {
        let tracker = MockIssueTracker::new();
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let report = moderator.moderate("hello\r\nworld").await.unwrap();

        assert_eq!(report.outcome, Outcome::Invalid);
        assert_eq!(
            tracker.calls(),
            vec![
                Call::Comment(format!("Read {DOCS}")),
                Call::Update(IssueUpdate {
                    state: Some(IssueState::Closed),
                    labels: Some(vec!["Invalid".to_string()]),
                    body: Some("Invalid".to_string()),
                }),
                Call::Lock,
            ]
        );
        assert_eq!(markers.markers(), vec![Marker::Invalid]);
    }

    #[tokio::test]
    async fn edits_body_down_to_kept_lines() {
        let tracker = MockIssueTracker::new();
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let body = "use_cpu_jit = false\r\nplease\r\nvolume = 0.5";
        let report = moderator.moderate(body).await.unwrap();

        assert_eq!(report.outcome, Outcome::EditedWithWarnings);
        assert_eq!(report.removed, vec!["please"]);
        assert_eq!(
            tracker.calls(),
            vec![
                Call::Update(IssueUpdate {
                    body: Some("use_cpu_jit = false\nvolume = 0.5".to_string()),
                    ..IssueUpdate::default()
                }),
                Call::Comment(format!(
                    "Useless lines removed:\n```\nplease\n```\n\nLines that aren't in {DOCS} are useless lines."
                )),
            ]
        );
        assert_eq!(markers.markers(), vec![Marker::Edited]);
    }

    #[tokio::test]
    async fn accepted_body_has_no_side_effects() {
        let tracker = MockIssueTracker::new();
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let report = moderator.moderate("use_cpu_jit = false\r\nvolume = 0.5").await.unwrap();

        assert_eq!(report.outcome, Outcome::Accepted);
        assert!(tracker.calls().is_empty());
        assert!(markers.markers().is_empty());
    }

    #[tokio::test]
    async fn plain_newlines_are_not_line_breaks() {
        let tracker = MockIssueTracker::new();
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let report = moderator.moderate("use_cpu_jit = false\nvolume = 0.5").await.unwrap();

        assert_eq!(report.outcome, Outcome::Invalid);
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let tracker = MockIssueTracker::new();
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let report = moderator.moderate("").await.unwrap();

        assert_eq!(report.outcome, Outcome::Invalid);
        assert_eq!(markers.markers(), vec![Marker::Invalid]);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn failed_call_stops_remaining_actions() {
        let tracker = MockIssueTracker::failing_on("update");
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let result = moderator.moderate("nothing useful").await;

        assert!(matches!(result, Err(SubmissionError::Transport(_))));
        assert_eq!(tracker.calls(), vec![Call::Comment(format!("Read {DOCS}"))]);
        assert!(markers.markers().is_empty());
    }

    #[tokio::test]
    async fn failed_first_call_attempts_nothing_else() {
        let tracker = MockIssueTracker::failing_on("update");
        let markers = MockMarkerWriter::new();
        let moderator = Moderator::new(&tracker, &markers, DOCS);

        let result = moderator.moderate("use_cpu_jit = false\r\nhi").await;

        assert!(result.is_err());
        assert!(tracker.calls().is_empty());
        assert!(markers.markers().is_empty());
    }
}

mod planning {
    use super::*;

    #[test]
    fn review_plans_without_calling_anything() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let report = review("hi", &rules, DOCS);

        assert_eq!(report.actions.len(), 4);
        assert_eq!(report.actions[2], ModerationAction::Lock);
        assert_eq!(
            report.actions[3],
            ModerationAction::WriteMarker {
                marker: Marker::Invalid
            }
        );
    }

    #[test]
    fn report_serializes_actions_with_tags() {
        let rules = catalog::custom_default_settings(CollectMode::MatchOnly);
        let report = review("use_cpu_jit = false\r\nhi", &rules, DOCS);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"], "edited_with_warnings");
        assert_eq!(json["actions"][0]["action"], "update");
        assert_eq!(json["removed"][0], "hi");
    }
}
