use codelet_eval::{
    damerau_levenshtein, normalized_damerau_levenshtein, EditDistanceEvaluator, Evaluator,
};

#[test]
fn classic_levenshtein_cases() {
    assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
    assert_eq!(damerau_levenshtein("", "abc"), 3);
    assert_eq!(damerau_levenshtein("abc", ""), 3);
    assert_eq!(damerau_levenshtein("same", "same"), 0);
}

#[test]
fn adjacent_transposition_costs_one() {
    assert_eq!(damerau_levenshtein("ab", "ba"), 1);
    assert_eq!(damerau_levenshtein("pritn", "print"), 1);
}

#[test]
fn transposed_substring_can_be_edited_again() {
    // the restricted variant would give 3
    assert_eq!(damerau_levenshtein("ca", "abc"), 2);
}

#[test]
fn counts_characters_not_bytes() {
    assert_eq!(damerau_levenshtein("héllo", "hello"), 1);
    assert_eq!(damerau_levenshtein("日本", "本日"), 1);
}

#[test]
fn distance_is_symmetric() {
    let a = "print('Hello, World!')";
    let b = "print(\"Hello, World!\")";
    assert_eq!(damerau_levenshtein(a, b), damerau_levenshtein(b, a));
    assert_eq!(damerau_levenshtein(a, b), 2);
}

#[test]
fn normalized_distance_bounds() {
    assert_eq!(normalized_damerau_levenshtein("", ""), 0.0);
    assert_eq!(normalized_damerau_levenshtein("abc", "abc"), 0.0);
    assert_eq!(normalized_damerau_levenshtein("abc", "xyz"), 1.0);
    assert!((normalized_damerau_levenshtein("abcd", "abce") - 0.25).abs() < 1e-9);
}

#[tokio::test]
async fn evaluator_passes_close_strings() {
    let evaluator = EditDistanceEvaluator::new(0.2);
    let result = evaluator
        .evaluate(
            "print('Hello, World!')",
            "print(\"Hello, World!\")",
            "How do I write hello world in Python?",
        )
        .await
        .unwrap();
    assert!(result.passed);
    assert!(result.score > 0.9);
    assert_eq!(result.evaluator, "edit_distance");
}

#[tokio::test]
async fn evaluator_fails_distant_strings() {
    let evaluator = EditDistanceEvaluator::new(0.2);
    let result = evaluator
        .evaluate("import sys", "print(\"Hello, World!\")", "")
        .await
        .unwrap();
    assert!(!result.passed);
}
