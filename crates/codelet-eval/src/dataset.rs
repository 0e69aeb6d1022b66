use codelet_core::CodeletError;
use serde::{Deserialize, Serialize};

use crate::evaluator::{EvalResult, Evaluator};

/// A question and the snippet it should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetItem {
    pub question: String,
    pub reference: String,
}

/// Questions with reference snippets, evaluated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub items: Vec<DatasetItem>,
}

impl Dataset {
    pub fn new(items: Vec<DatasetItem>) -> Self {
        Self { items }
    }

    /// `(question, reference)` pairs.
    pub fn from_pairs<Q, R>(pairs: impl IntoIterator<Item = (Q, R)>) -> Self
    where
        Q: Into<String>,
        R: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(question, reference)| DatasetItem {
                question: question.into(),
                reference: reference.into(),
            })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn questions(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.question.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<DatasetItem>> for Dataset {
    fn from(items: Vec<DatasetItem>) -> Self {
        Self::new(items)
    }
}

/// Per-item results plus pass counts. `accuracy` is 0.0 for an empty run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub results: Vec<EvalResult>,
    pub total: usize,
    pub passed: usize,
    pub accuracy: f64,
}

impl EvalReport {
    pub fn from_results(results: Vec<EvalResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|result| result.passed).count();
        let accuracy = match total {
            0 => 0.0,
            n => passed as f64 / n as f64,
        };
        Self {
            results,
            total,
            passed,
            accuracy,
        }
    }

    /// Indices and results of the items that failed.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &EvalResult)> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, result)| !result.passed)
    }
}

/// Judge `predictions[i]` against `dataset.items[i]`.
///
/// The two must be the same length. An evaluator error stops the run.
pub async fn evaluate(
    evaluator: &dyn Evaluator,
    dataset: &Dataset,
    predictions: &[String],
) -> Result<EvalReport, CodeletError> {
    if predictions.len() != dataset.len() {
        return Err(CodeletError::Validation(format!(
            "got {} predictions for a dataset of {} questions",
            predictions.len(),
            dataset.len()
        )));
    }

    let mut results = Vec::with_capacity(predictions.len());
    for (item, prediction) in dataset.items.iter().zip(predictions) {
        results.push(
            evaluator
                .evaluate(prediction, &item.reference, &item.question)
                .await?,
        );
    }

    let report = EvalReport::from_results(results);
    tracing::info!(
        evaluator = evaluator.name(),
        total = report.total,
        passed = report.passed,
        accuracy = report.accuracy,
        "dataset evaluated"
    );
    Ok(report)
}
