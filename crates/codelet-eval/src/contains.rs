use async_trait::async_trait;
use codelet_core::CodeletError;

use crate::evaluator::{EvalResult, Evaluator};

/// Passes when the reference occurs somewhere in the generated snippet,
/// e.g. `[]` in `my_list = []`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsEvaluator {
    ignore_case: bool,
}

impl ContainsEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive() -> Self {
        Self { ignore_case: true }
    }
}

#[async_trait]
impl Evaluator for ContainsEvaluator {
    fn name(&self) -> &'static str {
        "contains"
    }

    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        _question: &str,
    ) -> Result<EvalResult, CodeletError> {
        let found = if self.ignore_case {
            prediction.to_lowercase().contains(&reference.to_lowercase())
        } else {
            prediction.contains(reference)
        };

        let result = EvalResult::verdict(self.name(), found);
        Ok(if found {
            result
        } else {
            result.with_reasoning(format!("{prediction:?} does not contain {reference:?}"))
        })
    }
}
