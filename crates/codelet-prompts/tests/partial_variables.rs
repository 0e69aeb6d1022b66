use std::collections::HashMap;

use codelet_prompts::{PromptError, PromptTemplate};

#[test]
fn partial_variables_fill_in_template() {
    let template = PromptTemplate::new("Write {{ language }} for: {{ question }}")
        .with_partial("language", "python");

    let values = HashMap::from([("question".to_string(), "a for loop".to_string())]);
    let rendered = template.render(&values).unwrap();

    assert_eq!(rendered, "Write python for: a for loop");
}

#[test]
fn provided_values_override_partial_variables() {
    let template =
        PromptTemplate::new("Language: {{ language }}").with_partial("language", "python");

    let values = HashMap::from([("language".to_string(), "rust".to_string())]);
    let rendered = template.render(&values).unwrap();

    assert_eq!(rendered, "Language: rust");
}

#[test]
fn missing_variable_still_errors_with_partials() {
    let template =
        PromptTemplate::new("{{ language }}: {{ question }}").with_partial("language", "python");

    let err = template.render(&HashMap::new()).expect_err("should fail");

    assert_eq!(err, PromptError::MissingVariable("question".to_string()));
}

#[test]
fn partials_are_not_reported_as_input_variables() {
    let template =
        PromptTemplate::new("{{ language }}: {{ question }}").with_partial("language", "python");
    assert_eq!(template.input_variables(), vec!["question"]);
}
