use std::sync::Arc;

use inspector_engine::ComparisonRunner;

use crate::store::ComparisonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ComparisonStore,
    pub runner: Arc<ComparisonRunner>,
}

impl AppState {
    pub fn new(store: ComparisonStore, runner: ComparisonRunner) -> Self {
        Self {
            store,
            runner: Arc::new(runner),
        }
    }
}
