//! Generates concise Python snippets from natural-language questions.
//!
//! The chain is `prompt | model | StrOutputParser`: the question is rendered
//! into a fixed Llama 3 instruct template, sent to a chat model at temperature
//! zero, and the reply text is returned as-is.

mod chain;
mod config;
mod generator;
mod prompt;

pub use chain::{build_chain, ChatModelStep};
pub use config::{GeneratorConfig, TracingSettings, DEFAULT_MODEL, DEFAULT_PROJECT};
pub use generator::Generator;
pub use prompt::{python_snippet_prompt, PYTHON_SNIPPET_TEMPLATE};
