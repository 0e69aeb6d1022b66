use std::sync::Arc;

use codelet_embeddings::FakeEmbeddings;
use codelet_eval::{cosine_distance, embedding_distance, EmbeddingDistanceEvaluator, Evaluator};

#[tokio::test]
async fn identical_texts_have_zero_distance() {
    let embeddings = Arc::new(FakeEmbeddings::default());
    let evaluator = EmbeddingDistanceEvaluator::new(embeddings, 0.5);

    let result = evaluator
        .evaluate("print(\"Hello, World!\")", "print(\"Hello, World!\")", "")
        .await
        .unwrap();
    assert!(result.passed);
    assert!((result.score - 1.0).abs() < 1e-6);
    assert_eq!(result.evaluator, "embedding_distance");
}

#[tokio::test]
async fn different_but_similar_snippet_passes() {
    let evaluator = EmbeddingDistanceEvaluator::new(Arc::new(FakeEmbeddings::default()), 0.5);
    let result = evaluator
        .evaluate("print('Hello, World!')\n", "print(\"Hello, World!\")", "")
        .await
        .unwrap();
    assert!(result.passed);
    assert!(result.score < 1.0);
}

#[tokio::test]
async fn unrelated_snippet_fails() {
    let evaluator = EmbeddingDistanceEvaluator::new(Arc::new(FakeEmbeddings::new(16)), 0.5);
    let result = evaluator.evaluate("aaaa", "bbbb", "").await.unwrap();
    assert!(!result.passed);
    assert_eq!(result.score, 0.0);
}

#[tokio::test]
async fn threshold_is_exclusive() {
    let embeddings = Arc::new(FakeEmbeddings::default());
    // nothing is closer than distance 0
    let evaluator = EmbeddingDistanceEvaluator::new(embeddings, 0.0);

    let result = evaluator.evaluate("same", "same", "").await.unwrap();
    assert!(!result.passed);
    assert!(result.reasoning.unwrap().contains("threshold"));
}

#[tokio::test]
async fn distance_function_matches_evaluator() {
    let embeddings = FakeEmbeddings::new(8);
    let distance = embedding_distance(&embeddings, "hello world", "zzzzzzzzz")
        .await
        .unwrap();
    assert!(distance > 0.0);
    assert!(distance <= 2.0);
}

#[test]
fn cosine_distance_of_orthogonal_vectors_is_one() {
    let d = cosine_distance(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    assert!((d - 1.0).abs() < 1e-9);
}

#[test]
fn cosine_distance_of_opposite_vectors_is_two() {
    let d = cosine_distance(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
    assert!((d - 2.0).abs() < 1e-9);
}

#[test]
fn cosine_distance_with_zero_vector_is_one() {
    let d = cosine_distance(&[0.0, 0.0], &[0.3, 0.4]).unwrap();
    assert_eq!(d, 1.0);
}

#[test]
fn cosine_distance_rejects_mismatched_sizes() {
    let err = cosine_distance(&[1.0], &[1.0, 0.0]).unwrap_err();
    assert!(err.to_string().contains("different sizes"));
}
