//! Controller tying the submitter and the list viewer to a comparison service

use inspector_core::{
    Comparison, ComparisonForm, ComparisonHistory, ComparisonService, ComparisonSubmitter,
    SubmitState,
};

pub struct Inspector<S> {
    service: S,
    submitter: ComparisonSubmitter,
    history: ComparisonHistory,
}

impl<S: ComparisonService> Inspector<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            submitter: ComparisonSubmitter::new(),
            history: ComparisonHistory::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn form_mut(&mut self) -> &mut ComparisonForm {
        &mut self.submitter.form
    }

    pub fn submitter(&self) -> &ComparisonSubmitter {
        &self.submitter
    }

    pub fn history(&self) -> &ComparisonHistory {
        &self.history
    }

    /// Submit the form. A successful creation is followed by exactly one
    /// list refresh; a failure leaves the list alone.
    pub async fn submit(&mut self) -> &SubmitState {
        let Some(request) = self.submitter.begin() else {
            return self.submitter.state();
        };

        let outcome = self.service.create(&request).await;
        if self.submitter.finish(outcome) {
            self.refresh().await;
        }
        self.submitter.state()
    }

    /// Reload the list; failures are logged and the previous list kept
    pub async fn refresh(&mut self) -> &[Comparison] {
        let outcome = self.service.list().await;
        self.history.apply(outcome);
        self.history.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use inspector_core::{ComparisonId, InspectorError, NewComparison, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn record(id: i64, req: &NewComparison) -> Comparison {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "model_a": req.model_a, "prompt_a": req.prompt_a,
            "model_b": req.model_b, "prompt_b": req.prompt_b,
            "output_a": "Hi there", "output_b": "Hello",
            "similarity_score": 0.42, "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[derive(Default)]
    struct FakeService {
        fail_create: bool,
        fail_list: bool,
        stored: Mutex<Vec<Comparison>>,
        creates: AtomicUsize,
        lists: AtomicUsize,
    }

    #[async_trait]
    impl ComparisonService for FakeService {
        async fn create(&self, request: &NewComparison) -> Result<Comparison> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(InspectorError::from_status(500, "Internal Server Error"));
            }
            let mut stored = self.stored.lock().unwrap();
            let c = record(stored.len() as i64 + 1, request);
            stored.insert(0, c.clone());
            Ok(c)
        }

        async fn list(&self) -> Result<Vec<Comparison>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            if self.fail_list {
                return Err(InspectorError::Transport("connection refused".into()));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn get(&self, id: ComparisonId) -> Result<Comparison> {
            self.stored
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| InspectorError::from_status(404, "Not Found"))
        }
    }

    fn fill(inspector: &mut Inspector<FakeService>) {
        let form = inspector.form_mut();
        form.model_a = "gpt-4".into();
        form.prompt_a = "hello".into();
        form.model_b = "gpt-3.5-turbo".into();
        form.prompt_b = "hello".into();
    }

    #[tokio::test]
    async fn test_successful_submit_refreshes_once() {
        let mut inspector = Inspector::new(FakeService::default());
        fill(&mut inspector);

        let state = inspector.submit().await.clone();
        let SubmitState::Success(result) = state else {
            panic!("expected success, got {:?}", state);
        };
        assert_eq!(result.model_a, "gpt-4");
        assert_eq!(result.model_b, "gpt-3.5-turbo");
        assert_eq!(result.output_a, "Hi there");
        assert_eq!(result.output_b, "Hello");

        assert_eq!(inspector.service().creates.load(Ordering::SeqCst), 1);
        assert_eq!(inspector.service().lists.load(Ordering::SeqCst), 1);
        assert_eq!(inspector.history().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_sets_error_without_refresh() {
        let mut inspector = Inspector::new(FakeService {
            fail_create: true,
            ..Default::default()
        });
        fill(&mut inspector);

        inspector.submit().await;
        assert_eq!(inspector.submitter().result(), None);
        assert_eq!(inspector.submitter().error(), Some("Error: Internal Server Error"));
        assert_eq!(inspector.service().lists.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_incomplete_form_never_calls_service() {
        let mut inspector = Inspector::new(FakeService::default());
        fill(&mut inspector);
        inspector.form_mut().model_b = "   ".into();

        assert_eq!(inspector.submit().await, &SubmitState::Idle);
        assert_eq!(inspector.service().creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_list() {
        let mut inspector = Inspector::new(FakeService::default());
        fill(&mut inspector);
        inspector.submit().await;
        assert_eq!(inspector.history().entries().len(), 1);

        inspector.service.fail_list = true;
        let entries = inspector.refresh().await.to_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(inspector.submitter().error(), None);
    }
}
