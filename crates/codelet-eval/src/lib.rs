//! Checks for generated snippets: `expect` style assertions for tests, and
//! `Evaluator`s for scoring a whole dataset.

mod contains;
mod dataset;
mod edit_distance;
mod embedding_distance;
mod evaluator;
mod expect;

pub use contains::ContainsEvaluator;
pub use dataset::{evaluate, Dataset, DatasetItem, EvalReport};
pub use edit_distance::{
    damerau_levenshtein, normalized_damerau_levenshtein, EditDistanceEvaluator,
};
pub use embedding_distance::{cosine_distance, embedding_distance, EmbeddingDistanceEvaluator};
pub use evaluator::{EvalResult, Evaluator};
pub use expect::{
    expect, expect_edit_distance, expect_embedding_distance, Expectation, Measurement,
};
