//! Assertion helpers for unit-testing model output.
//!
//! ```ignore
//! expect(&output).to_contain("[]")?;
//!
//! expect_embedding_distance(&embeddings, &output, reference)
//!     .await?
//!     .to_be_less_than(0.5)?;
//!
//! // recorded (logged) without asserting anything
//! expect_edit_distance(&output, reference);
//! ```
//!
//! Every failed assertion is a `CodeletError::Expectation`, so test bodies can
//! use `?` or `unwrap()`.

use codelet_core::{CodeletError, Embeddings};

use crate::edit_distance::normalized_damerau_levenshtein;
use crate::embedding_distance::embedding_distance;

/// Start an expectation on a piece of model output.
pub fn expect(value: impl Into<String>) -> Expectation {
    Expectation {
        value: value.into(),
    }
}

/// Embed `prediction` and `reference` and measure their cosine distance.
pub async fn expect_embedding_distance(
    embeddings: &dyn Embeddings,
    prediction: &str,
    reference: &str,
) -> Result<Measurement, CodeletError> {
    let distance = embedding_distance(embeddings, prediction, reference).await?;
    Ok(Measurement::new("embedding_distance", distance))
}

/// Measure the normalized Damerau-Levenshtein distance between two strings.
pub fn expect_edit_distance(prediction: &str, reference: &str) -> Measurement {
    Measurement::new(
        "edit_distance",
        normalized_damerau_levenshtein(prediction, reference),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    value: String,
}

impl Expectation {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_equal(&self, expected: &str) -> Result<(), CodeletError> {
        check(
            self.value == expected,
            format!("expected {:?} to equal {:?}", self.value, expected),
        )
    }

    pub fn to_contain(&self, needle: &str) -> Result<(), CodeletError> {
        check(
            self.value.contains(needle),
            format!("expected {:?} to contain {:?}", self.value, needle),
        )
    }

    pub fn not_to_contain(&self, needle: &str) -> Result<(), CodeletError> {
        check(
            !self.value.contains(needle),
            format!("expected {:?} not to contain {:?}", self.value, needle),
        )
    }

    pub fn to_be_non_empty(&self) -> Result<(), CodeletError> {
        check(
            !self.value.trim().is_empty(),
            "expected a non-empty value".to_string(),
        )
    }
}

/// A named score produced by a fuzzy-match helper.
///
/// The score is logged when the measurement is taken, whether or not it is
/// asserted on afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    key: &'static str,
    value: f64,
}

impl Measurement {
    pub fn new(key: &'static str, value: f64) -> Self {
        tracing::info!(key, score = value, "measurement recorded");
        Self { key, value }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn to_be_less_than(&self, bound: f64) -> Result<(), CodeletError> {
        check(
            self.value < bound,
            format!("expected {} ({}) to be less than {}", self.key, self.value, bound),
        )
    }

    pub fn to_be_greater_than(&self, bound: f64) -> Result<(), CodeletError> {
        check(
            self.value > bound,
            format!(
                "expected {} ({}) to be greater than {}",
                self.key, self.value, bound
            ),
        )
    }

    /// Exclusive on both ends.
    pub fn to_be_between(&self, min: f64, max: f64) -> Result<(), CodeletError> {
        check(
            min < self.value && self.value < max,
            format!(
                "expected {} ({}) to be between {} and {}",
                self.key, self.value, min, max
            ),
        )
    }
}

fn check(ok: bool, message: String) -> Result<(), CodeletError> {
    if ok {
        Ok(())
    } else {
        tracing::debug!(%message, "expectation failed");
        Err(CodeletError::Expectation(message))
    }
}
