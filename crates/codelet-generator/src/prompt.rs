use codelet_prompts::PromptTemplate;

pub const PYTHON_SNIPPET_TEMPLATE: &str = "\
<|begin_of_text|>

<|start_header_id|>system<|end_header_id|>

You are an AI assistant for generating python. Generate a python code snippet that answers the following question.
Keep your answer concise, only include the necessary code snippet with no preamble or explanation.

<|eot_id|>

<|start_header_id|>user<|end_header_id|>

Question: {{ question }}
Answer:

<|eot_id|>

<|start_header_id|>assistant<|end_header_id|>";

/// The fixed snippet prompt. Its only slot is `question`.
pub fn python_snippet_prompt() -> PromptTemplate {
    PromptTemplate::new(PYTHON_SNIPPET_TEMPLATE)
}
