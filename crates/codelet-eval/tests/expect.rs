use codelet_core::CodeletError;
use codelet_embeddings::FakeEmbeddings;
use codelet_eval::{
    cosine_distance, expect, expect_edit_distance, expect_embedding_distance, Measurement,
};

#[test]
fn to_equal_passes_and_fails() {
    expect("for i in range(10):")
        .to_equal("for i in range(10):")
        .unwrap();

    let err = expect("for i in range(5):")
        .to_equal("for i in range(10):")
        .unwrap_err();
    assert!(matches!(err, CodeletError::Expectation(_)));
    assert!(err.to_string().contains("to equal"));
}

#[test]
fn to_contain_checks_substring() {
    let output = String::from("my_list = []");
    expect(&output).to_contain("[]").unwrap();
    assert!(expect(&output).to_contain("{}").is_err());
    expect(&output).not_to_contain("{}").unwrap();
    assert!(expect(&output).not_to_contain("[]").is_err());
}

#[test]
fn to_be_non_empty_ignores_whitespace() {
    expect("x = 1").to_be_non_empty().unwrap();
    assert!(expect("  \n").to_be_non_empty().is_err());
}

#[test]
fn expectation_exposes_value() {
    assert_eq!(expect("abc").value(), "abc");
}

#[tokio::test]
async fn embedding_distance_measurement() {
    let embeddings = FakeEmbeddings::default();
    let reference = "print(\"Hello, World!\")";

    let measurement = expect_embedding_distance(&embeddings, reference, reference)
        .await
        .unwrap();

    assert_eq!(measurement.key(), "embedding_distance");
    assert!(measurement.value() < 1e-6);
    measurement.to_be_less_than(0.5).unwrap();
    assert!(measurement.to_be_greater_than(0.5).is_err());
}

#[tokio::test]
async fn differently_quoted_hello_world_is_within_half() {
    let embeddings = FakeEmbeddings::default();
    let measurement = expect_embedding_distance(
        &embeddings,
        "print('Hello, World!')\n",
        "print(\"Hello, World!\")",
    )
    .await
    .unwrap();

    assert!(measurement.value() > 0.0);
    measurement.to_be_less_than(0.5).unwrap();
}

#[tokio::test]
async fn unrelated_output_is_not_within_half() {
    let embeddings = FakeEmbeddings::new(16);
    let measurement = expect_embedding_distance(&embeddings, "aaaa", "bbbb")
        .await
        .unwrap();

    let err = measurement.to_be_less_than(0.5).unwrap_err();
    assert!(matches!(err, CodeletError::Expectation(_)));
}

#[test]
fn orthogonal_vectors_fail_the_distance_bound() {
    let distance = cosine_distance(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    let err = Measurement::new("embedding_distance", distance)
        .to_be_less_than(0.5)
        .unwrap_err();

    assert!(matches!(err, CodeletError::Expectation(_)));
    assert!(err.to_string().contains("embedding_distance"));
}

#[test]
fn edit_distance_measurement_needs_no_assertion() {
    let measurement = expect_edit_distance("print('Hello, World!')", "print(\"Hello, World!\")");
    assert_eq!(measurement.key(), "edit_distance");
    assert!((measurement.value() - 2.0 / 22.0).abs() < 1e-9);
}

#[test]
fn measurement_bounds() {
    let m = expect_edit_distance("abcd", "abce");
    m.to_be_less_than(0.3).unwrap();
    m.to_be_greater_than(0.2).unwrap();
    m.to_be_between(0.2, 0.3).unwrap();

    let err = m.to_be_between(0.25, 0.3).unwrap_err();
    assert!(err.to_string().contains("between"));
    assert!(m.to_be_less_than(0.25).is_err());
}
