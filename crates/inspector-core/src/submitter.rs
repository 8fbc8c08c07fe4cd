//! Comparison submitter model - form input plus the in-flight request state

use crate::{Comparison, ComparisonForm, NewComparison, Result};

pub const SUBMIT_LABEL: &str = "Compare Models";
pub const SUBMITTING_LABEL: &str = "Comparing...";
const FALLBACK_ERROR: &str = "An error occurred";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success(Comparison),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSubmitter {
    pub form: ComparisonForm,
    state: SubmitState,
}

impl ComparisonSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    /// Submit is enabled only with a complete form and nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.is_complete()
    }

    pub fn result(&self) -> Option<&Comparison> {
        match &self.state {
            SubmitState::Success(c) => Some(c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Enter `Submitting`, clearing the previous result and error.
    ///
    /// Returns the payload to send, or `None` when submission is disabled.
    pub fn begin(&mut self) -> Option<NewComparison> {
        if !self.can_submit() {
            return None;
        }
        let request = self.form.to_request().ok()?;
        self.state = SubmitState::Submitting;
        tracing::debug!("Submitting comparison {} vs {}", request.model_a, request.model_b);
        Some(request)
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Returns `true` when the list should be refreshed, which happens only
    /// after a successful creation.
    pub fn finish(&mut self, outcome: Result<Comparison>) -> bool {
        if !self.is_submitting() {
            tracing::debug!("Ignoring comparison outcome with no submission in flight");
            return false;
        }

        match outcome {
            Ok(comparison) => {
                tracing::info!("Comparison {} created", comparison.id);
                self.state = SubmitState::Success(comparison);
                true
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("Comparison failed: {}", message);
                self.state = SubmitState::Error(if message.trim().is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InspectorError;

    fn ready() -> ComparisonSubmitter {
        let mut s = ComparisonSubmitter::new();
        s.form.model_a = "gpt-4".into();
        s.form.prompt_a = "hello".into();
        s.form.model_b = "gpt-3.5-turbo".into();
        s.form.prompt_b = "hello".into();
        s
    }

    fn record() -> Comparison {
        serde_json::from_value(serde_json::json!({
            "id": 1, "model_a": "gpt-4", "prompt_a": "hello",
            "model_b": "gpt-3.5-turbo", "prompt_b": "hello",
            "output_a": "Hi there", "output_b": "Hello",
            "similarity_score": 0.42, "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_begin_disabled_for_incomplete_form() {
        let mut s = ready();
        s.form.prompt_b = "  ".into();
        assert!(!s.can_submit());
        assert_eq!(s.begin(), None);
        assert_eq!(s.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_begin_blocks_second_submission() {
        let mut s = ready();
        assert!(s.begin().is_some());
        assert!(s.is_submitting());
        assert!(!s.can_submit());
        assert_eq!(s.button_label(), SUBMITTING_LABEL);
        assert_eq!(s.begin(), None);
    }

    #[test]
    fn test_success_sets_result_and_requests_refresh() {
        let mut s = ready();
        s.begin().unwrap();
        assert!(s.finish(Ok(record())));
        let result = s.result().unwrap();
        assert_eq!(result.model_a, "gpt-4");
        assert_eq!(result.model_b, "gpt-3.5-turbo");
        assert_eq!(s.error(), None);
        assert_eq!(s.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_failure_clears_result_and_sets_message() {
        let mut s = ready();
        s.begin().unwrap();
        s.finish(Ok(record()));

        s.begin().unwrap();
        assert_eq!(s.result(), None);
        let refresh = s.finish(Err(InspectorError::from_status(500, "Internal Server Error")));
        assert!(!refresh);
        assert_eq!(s.result(), None);
        assert_eq!(s.error(), Some("Error: Internal Server Error"));
        assert!(s.can_submit());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut s = ready();
        s.begin().unwrap();
        s.finish(Err(InspectorError::Transport("connection refused".into())));
        assert!(s.error().is_some());
        s.begin().unwrap();
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut s = ready();
        assert!(!s.finish(Ok(record())));
        assert_eq!(s.state(), &SubmitState::Idle);
    }
}
