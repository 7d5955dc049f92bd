//! Tests for the plugin maker

use plugreq::core::SubmissionError;
use plugreq::core::models::{PluginRequest, RequestKind, TEXT_PLAIN};
use plugreq::core::services::{PluginMaker, SubmitOutcome, SubmitState};

use crate::common::mocks::MockBuildService;

fn settings(lines: &str) -> PluginRequest {
    PluginRequest::CustomDefaultSettings {
        lines: lines.to_string(),
    }
}

mod settings_requests {
    use super::*;

    #[tokio::test]
    async fn normalizes_lines_in_place_before_sending() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = settings("use_cpu_jit = false\nhi\nvolume = 0.25");

        let outcome = maker.submit(&mut request).await.unwrap();

        assert_eq!(request, settings("use_cpu_jit = false\nvolume = 0.25"));
        let sent = maker.service().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].endpoint, "custom-default-settings");
        assert_eq!(sent[0].content_type, TEXT_PLAIN);
        assert_eq!(sent[0].body, "use_cpu_jit = false\nvolume = 0.25");

        let SubmitOutcome::Built(submission) = outcome else {
            panic!("expected a build, got {outcome:?}");
        };
        assert_eq!(submission.kind, RequestKind::CustomDefaultSettings);
        assert_eq!(submission.dropped, 1);
        assert_eq!(submission.extractions.len(), 2);
        assert_eq!(submission.archive, b"PK\x03\x04");
    }

    #[tokio::test]
    async fn all_invalid_lines_send_nothing() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = settings("hi\nthere");

        let result = maker.submit(&mut request).await;

        assert!(matches!(result, Err(SubmissionError::NoValidLines)));
        assert_eq!(request, settings("hi\nthere"));
        assert_eq!(maker.service().call_count(), 0);
        assert_eq!(maker.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn empty_input_sends_nothing() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = settings("");

        let result = maker.submit(&mut request).await;

        assert!(matches!(result, Err(SubmissionError::NoValidLines)));
        assert_eq!(maker.service().call_count(), 0);
    }

    #[tokio::test]
    async fn carriage_returns_stay_on_lines() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = settings("use_cpu_jit = false\r\nvolume = 0.25");

        maker.submit(&mut request).await.unwrap();

        assert_eq!(request, settings("volume = 0.25"));
    }
}

mod other_requests {
    use super::*;

    #[tokio::test]
    async fn numeric_requests_are_sent_as_json_text() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = PluginRequest::WindowSize {
            width: 800,
            height: 600,
        };

        maker.submit(&mut request).await.unwrap();

        let sent = maker.service().requests();
        assert_eq!(sent[0].endpoint, "window-size");
        assert_eq!(sent[0].content_type, TEXT_PLAIN);
        let body: serde_json::Value = serde_json::from_str(&sent[0].body).unwrap();
        assert_eq!(body, serde_json::json!({ "width": 800, "height": 600 }));
    }

    #[tokio::test]
    async fn unrecognized_params_are_still_sent() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = PluginRequest::ButtonToTouch {
            x: 10,
            y: 20,
            params: "not params".to_string(),
        };

        let outcome = maker.submit(&mut request).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Built(_)));
        assert_eq!(maker.service().call_count(), 1);
    }

    #[tokio::test]
    async fn log_file_path_is_the_body() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = PluginRequest::LogFile {
            path: "/tmp/vvctre.log".to_string(),
        };

        maker.submit(&mut request).await.unwrap();

        assert_eq!(maker.service().requests()[0].body, "/tmp/vvctre.log");
    }
}

mod busy_state {
    use super::*;

    #[tokio::test]
    async fn concurrent_submit_is_ignored() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut first = PluginRequest::WindowPosition { x: -5, y: 10 };
        let mut second = PluginRequest::WindowPosition { x: 0, y: 0 };

        let (a, b) = tokio::join!(maker.submit(&mut first), maker.submit(&mut second));

        assert!(matches!(a, Ok(SubmitOutcome::Built(_))));
        assert!(matches!(b, Ok(SubmitOutcome::Busy)));
        assert_eq!(maker.service().call_count(), 1);
        assert_eq!(maker.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn failure_releases_busy_state() {
        let maker = PluginMaker::new(MockBuildService::failing());
        let mut request = PluginRequest::WindowSize {
            width: 400,
            height: 480,
        };

        let first = maker.submit(&mut request).await;
        assert!(matches!(first, Err(SubmissionError::Transport(_))));
        assert_eq!(maker.state(), SubmitState::Idle);

        let second = maker.submit(&mut request).await;
        assert!(second.is_err());
        assert_eq!(maker.service().call_count(), 2);
    }

    #[tokio::test]
    async fn sequential_submits_both_build() {
        let maker = PluginMaker::new(MockBuildService::new());
        let mut request = settings("use_cpu_jit = true");

        maker.submit(&mut request).await.unwrap();
        maker.submit(&mut request).await.unwrap();

        assert_eq!(maker.service().call_count(), 2);
    }
}
