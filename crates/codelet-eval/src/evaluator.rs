use async_trait::async_trait;
use codelet_core::CodeletError;
use serde::{Deserialize, Serialize};

/// One evaluator's verdict on one generated snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    /// `Evaluator::name` of the evaluator that produced it.
    pub evaluator: String,
    /// 1.0 is a perfect match, 0.0 nothing in common.
    pub score: f64,
    pub passed: bool,
    pub reasoning: Option<String>,
}

impl EvalResult {
    /// Pass/fail check: the score is 1.0 or 0.0.
    pub fn verdict(evaluator: &str, passed: bool) -> Self {
        Self {
            evaluator: evaluator.to_string(),
            score: if passed { 1.0 } else { 0.0 },
            passed,
            reasoning: None,
        }
    }

    /// A distance against an exclusive upper bound. The score is
    /// `1 - distance` clamped to `[0, 1]`.
    pub fn within(evaluator: &str, distance: f64, threshold: f64) -> Self {
        Self {
            evaluator: evaluator.to_string(),
            score: (1.0 - distance).clamp(0.0, 1.0),
            passed: distance < threshold,
            reasoning: Some(format!(
                "{evaluator} {distance:.4}, threshold {threshold:.4}"
            )),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}

/// Judges a generated snippet against the reference answer for the question
/// that produced it.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Stable short name, copied into every `EvalResult`.
    fn name(&self) -> &'static str;

    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        question: &str,
    ) -> Result<EvalResult, CodeletError>;
}
