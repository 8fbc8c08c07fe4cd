use inspector_core::{SimilarityConfig, SimilarityMethod};
use similar::TextDiff;

use crate::TextGenerator;

/// Word-level diff ratio in [0, 1]. Two blank outputs are identical.
pub fn lexical_similarity(a: &str, b: &str) -> f64 {
    if a.trim().is_empty() && b.trim().is_empty() {
        return 1.0;
    }
    f64::from(TextDiff::from_words(a, b).ratio()).clamp(0.0, 1.0)
}

/// Cosine similarity clamped to [0, 1]; `None` for mismatched or zero vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b).fold((0.0f64, 0.0f64, 0.0f64), |acc, (x, y)| {
        let (x, y) = (f64::from(*x), f64::from(*y));
        (acc.0 + x * y, acc.1 + x * x, acc.2 + y * y)
    });

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0))
}

#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    method: SimilarityMethod,
    embedding_model: String,
}

impl SimilarityScorer {
    pub fn new(config: &SimilarityConfig) -> Self {
        Self {
            method: config.method,
            embedding_model: config.embedding_model.clone(),
        }
    }

    pub fn method(&self) -> SimilarityMethod {
        self.method
    }

    /// Score two outputs. Embedding failures leave the score unset.
    pub async fn score(&self, generator: &dyn TextGenerator, a: &str, b: &str) -> Option<f64> {
        match self.method {
            SimilarityMethod::Lexical => Some(lexical_similarity(a, b)),
            SimilarityMethod::Embedding => {
                match generator.embed(&self.embedding_model, &[a, b]).await {
                    Ok(vectors) => match vectors.as_slice() {
                        [va, vb] => cosine_similarity(va, vb),
                        _ => None,
                    },
                    Err(e) => {
                        tracing::warn!("Similarity not computed: {}", e);
                        None
                    }
                }
            }
        }
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(&SimilarityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_bounds() {
        assert_eq!(lexical_similarity("the cat sat", "the cat sat"), 1.0);
        assert_eq!(lexical_similarity("", "  "), 1.0);
        let s = lexical_similarity("the cat sat", "the dog sat");
        assert!(s > 0.0 && s < 1.0, "score {}", s);
        assert_eq!(lexical_similarity("alpha", "omega"), 0.0);
    }

    #[test]
    fn test_cosine() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]), Some(1.0));
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), Some(0.0));
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), Some(0.0));
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), None);
    }
}
