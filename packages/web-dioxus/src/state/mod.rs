//! Form state for the submission page.

use std::fmt::Display;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// State owned by the submission form: the code being edited and the last
/// documentation result received from the parse service.
///
/// Kept out of the UI layer so the observable transitions can be tested
/// without a running app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub code: String,
    pub documentation: Option<Value>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input text with the latest edit. Always succeeds; no
    /// validation is performed.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.code = text.into();
    }

    /// Apply the outcome of a submission, in arrival order.
    ///
    /// A successful response replaces the documentation wholesale. A failure
    /// is logged and leaves the previous result (possibly absent) in place;
    /// the form shows no error state.
    pub fn apply(&mut self, outcome: Result<Value, impl Display>) {
        match outcome {
            Ok(documentation) => self.documentation = Some(documentation),
            Err(error) => {
                tracing::error!(%error, "Error parsing VBA code");
            }
        }
    }

    /// Pretty-printed documentation, or `None` when no result has arrived.
    pub fn rendered(&self) -> Option<String> {
        self.documentation.as_ref().map(pretty)
    }
}

/// Serialize a documentation value with 4-space indentation.
fn pretty(value: &Value) -> String {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut ser)
        .expect("writing JSON to a Vec does not fail");
    String::from_utf8(out).expect("serde_json emits UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser_client::{MockParseService, ParseService, ParserError};
    use serde_json::json;

    #[test]
    fn edit_reflects_the_last_input() {
        let mut state = SubmissionState::new();
        for text in ["", "Dim x As Integer", "Sub Main()\nEnd Sub", ""] {
            state.edit(text);
            assert_eq!(state.code, text);
        }
    }

    #[test]
    fn success_replaces_documentation_wholesale() {
        let mut state = SubmissionState::new();
        state.apply(Ok::<_, ParserError>(json!({"Comments": ["old"]})));
        state.apply(Ok::<_, ParserError>(json!({"Variables": []})));
        assert_eq!(state.documentation, Some(json!({"Variables": []})));
    }

    #[test]
    fn failure_leaves_documentation_unchanged() {
        let mut state = SubmissionState::new();
        state.apply(Ok::<_, ParserError>(json!({"summary": "kept"})));
        let before = state.documentation.clone();

        state.apply(Err::<Value, _>(ParserError::Api {
            status: 500,
            message: "internal error".to_string(),
        }));

        assert_eq!(state.documentation, before);
    }

    #[test]
    fn failure_with_no_prior_result_stays_absent() {
        let mut state = SubmissionState::new();
        state.apply(Err::<Value, _>(ParserError::Api {
            status: 400,
            message: r#"{"error": "No VBA code provided"}"#.to_string(),
        }));

        assert_eq!(state.documentation, None);
        assert_eq!(state.rendered(), None);
    }

    #[test]
    fn rendered_uses_four_space_indentation() {
        let mut state = SubmissionState::new();
        state.edit("Dim x As Integer");
        state.apply(Ok::<_, ParserError>(json!({"summary": "declares x"})));

        assert_eq!(
            state.rendered().unwrap(),
            "{\n    \"summary\": \"declares x\"\n}"
        );
    }

    #[test]
    fn rendered_indents_nested_values() {
        let mut state = SubmissionState::new();
        state.apply(Ok::<_, ParserError>(json!({
            "Variables": [{"Name": "x"}]
        })));

        let rendered = state.rendered().unwrap();
        assert!(rendered.contains("\n    \"Variables\": [\n        {\n            \"Name\": \"x\"\n        }\n    ]"));
    }

    #[tokio::test]
    async fn submission_flow_against_the_mock_service() {
        let service = MockParseService::new()
            .with_documentation("Dim x As Integer", json!({"summary": "declares x"}));
        let mut state = SubmissionState::new();

        state.edit("Dim x As Integer");
        let code = state.code.clone();
        state.apply(service.parse(&code).await);

        assert_eq!(
            state.rendered().unwrap(),
            "{\n    \"summary\": \"declares x\"\n}"
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_previous_result() {
        let service = MockParseService::new()
            .with_documentation("Sub A()\nEnd Sub", json!({"Subroutines": ["A"]}))
            .with_failure("");
        let mut state = SubmissionState::new();

        state.edit("Sub A()\nEnd Sub");
        let code = state.code.clone();
        state.apply(service.parse(&code).await);

        state.edit("");
        let code = state.code.clone();
        state.apply(service.parse(&code).await);

        assert_eq!(state.documentation, Some(json!({"Subroutines": ["A"]})));
    }

    #[tokio::test]
    async fn later_arrival_wins_when_submissions_overlap() {
        let service = MockParseService::new()
            .with_documentation("first", json!({"summary": "first"}))
            .with_documentation("second", json!({"summary": "second"}));
        let mut state = SubmissionState::new();

        // Two unguarded submissions in flight at once; outcomes are applied
        // in arrival order, not request order.
        state.edit("first");
        let first = service.parse("first");
        state.edit("second");
        let second = service.parse("second");

        state.apply(second.await);
        state.apply(first.await);

        assert_eq!(state.documentation, Some(json!({"summary": "first"})));
        assert_eq!(service.call_count(), 2);
    }
}
