use std::collections::HashMap;

use async_trait::async_trait;
use codelet_core::CodeletError;

use crate::evaluator::{EvalResult, Evaluator};

/// Damerau-Levenshtein distance between two strings, counted in Unicode scalar values.
///
/// This is the unrestricted variant: insertions, deletions, substitutions and
/// transpositions of adjacent characters each cost one, and a substring may be
/// edited after being transposed (`"ca"` -> `"abc"` is 2, not 3).
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let width = m + 2;
    let max_dist = n + m;
    let mut d = vec![0usize; (n + 2) * width];
    let at = |i: usize, j: usize| i * width + j;

    d[at(0, 0)] = max_dist;
    for i in 0..=n {
        d[at(i + 1, 0)] = max_dist;
        d[at(i + 1, 1)] = i;
    }
    for j in 0..=m {
        d[at(0, j + 1)] = max_dist;
        d[at(1, j + 1)] = j;
    }

    // last row in `a` where each character was seen
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=n {
        let mut last_match_col = 0;
        for j in 1..=m {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = d[at(i, j)] + cost;
            let insertion = d[at(i + 1, j)] + 1;
            let deletion = d[at(i, j + 1)] + 1;
            let transposition = d[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

            d[at(i + 1, j + 1)] = substitution.min(insertion).min(deletion).min(transposition);
        }
        last_row.insert(a[i - 1], i);
    }

    d[at(n + 1, m + 1)]
}

/// Damerau-Levenshtein distance divided by the length of the longer string.
///
/// 0.0 means identical, 1.0 means nothing in common. Two empty strings are identical.
pub fn normalized_damerau_levenshtein(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    damerau_levenshtein(a, b) as f64 / longest as f64
}

/// Passes when the normalized edit distance is strictly below `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceEvaluator {
    threshold: f64,
}

impl EditDistanceEvaluator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl Evaluator for EditDistanceEvaluator {
    fn name(&self) -> &'static str {
        "edit_distance"
    }

    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        _question: &str,
    ) -> Result<EvalResult, CodeletError> {
        let distance = normalized_damerau_levenshtein(prediction, reference);
        Ok(EvalResult::within(self.name(), distance, self.threshold))
    }
}
