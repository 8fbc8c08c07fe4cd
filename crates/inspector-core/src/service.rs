use async_trait::async_trait;

use crate::{Comparison, ComparisonId, NewComparison, Result};

/// The comparison backend: runs both models, scores and persists the result.
#[async_trait]
pub trait ComparisonService: Send + Sync {
    async fn create(&self, request: &NewComparison) -> Result<Comparison>;

    async fn list(&self) -> Result<Vec<Comparison>>;

    async fn get(&self, id: ComparisonId) -> Result<Comparison>;
}
