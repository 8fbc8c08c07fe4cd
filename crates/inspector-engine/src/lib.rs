pub mod diff;
pub mod error;
pub mod ollama;
pub mod runner;
pub mod similarity;

use async_trait::async_trait;

pub use error::{EngineError, Result};
pub use ollama::OllamaClient;
pub use runner::{ComparisonOutcome, ComparisonRunner};
pub use similarity::SimilarityScorer;

/// Backend that turns (model, prompt) into text, and text into embeddings
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;

    async fn embed(&self, model: &str, inputs: &[&str]) -> Result<Vec<Vec<f32>>>;
}
