use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{CodeletError, Embeddings};

use crate::evaluator::{EvalResult, Evaluator};

/// Cosine distance (`1 - cosine similarity`) between two vectors.
///
/// A zero vector is treated as maximally distant from everything (distance 1.0).
/// Vectors of different lengths are an error.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f64, CodeletError> {
    if a.len() != b.len() {
        return Err(CodeletError::Embedding(format!(
            "cannot compare embeddings of different sizes ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(1.0);
    }
    let similarity: f64 = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok(1.0 - similarity.clamp(-1.0, 1.0))
}

/// Embed both texts and return their cosine distance.
pub async fn embedding_distance(
    embeddings: &dyn Embeddings,
    prediction: &str,
    reference: &str,
) -> Result<f64, CodeletError> {
    let vectors = embeddings.embed_documents(&[prediction, reference]).await?;
    match vectors.as_slice() {
        [pred, reference] => cosine_distance(pred, reference),
        other => Err(CodeletError::Embedding(format!(
            "expected 2 embeddings, got {}",
            other.len()
        ))),
    }
}

/// Passes when the cosine distance between the embeddings of the snippet and
/// the reference is strictly below `threshold` (0.5 for the hello-world check).
pub struct EmbeddingDistanceEvaluator {
    embeddings: Arc<dyn Embeddings>,
    threshold: f64,
}

impl EmbeddingDistanceEvaluator {
    pub fn new(embeddings: Arc<dyn Embeddings>, threshold: f64) -> Self {
        Self {
            embeddings,
            threshold,
        }
    }
}

#[async_trait]
impl Evaluator for EmbeddingDistanceEvaluator {
    fn name(&self) -> &'static str {
        "embedding_distance"
    }

    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        _question: &str,
    ) -> Result<EvalResult, CodeletError> {
        let distance = embedding_distance(self.embeddings.as_ref(), prediction, reference).await?;
        Ok(EvalResult::within(self.name(), distance, self.threshold))
    }
}
