use std::sync::Arc;

use inspector_core::{Analysis, NewComparison};

use crate::{diff, Result, SimilarityScorer, TextGenerator};

/// Everything the service computes for one comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub output_a: String,
    pub output_b: String,
    pub similarity_score: Option<f64>,
    pub analysis: Analysis,
}

pub struct ComparisonRunner {
    generator: Arc<dyn TextGenerator>,
    scorer: SimilarityScorer,
}

impl ComparisonRunner {
    pub fn new(generator: Arc<dyn TextGenerator>, scorer: SimilarityScorer) -> Self {
        Self { generator, scorer }
    }

    /// Run both models concurrently, then diff and score their outputs.
    /// Fails as a whole if either model fails.
    pub async fn run(&self, request: &NewComparison) -> Result<ComparisonOutcome> {
        tracing::info!(
            "Comparing {} vs {}",
            request.model_a,
            request.model_b
        );

        let (output_a, output_b) = tokio::try_join!(
            self.generator.generate(&request.model_a, &request.prompt_a),
            self.generator.generate(&request.model_b, &request.prompt_b),
        )?;

        let analysis = diff::analyze(&output_a, &output_b);
        let similarity_score = self
            .scorer
            .score(self.generator.as_ref(), &output_a, &output_b)
            .await;

        tracing::debug!(
            "Comparison done: {} changes, similarity {:?}",
            analysis.total_changes,
            similarity_score
        );

        Ok(ComparisonOutcome {
            output_a,
            output_b,
            similarity_score,
            analysis,
        })
    }
}
