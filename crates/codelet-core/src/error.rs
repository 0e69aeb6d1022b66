use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeletError {
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("model error: {0}")]
    Model(String),
    #[error("parsing error: {0}")]
    Parsing(String),
    #[error("embedding error: {0}")]
    Embedding(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("callback error: {0}")]
    Callback(String),
    #[error("config error: {0}")]
    Config(String),
    /// A failed `expect` style assertion on model output.
    #[error("expectation failed: {0}")]
    Expectation(String),
}
