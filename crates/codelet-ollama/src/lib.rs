//! Ollama chat and embedding models over a `ProviderBackend`.

mod api;
mod chat_model;
mod embeddings;

pub use chat_model::{OllamaChatModel, OllamaConfig, OllamaOptions, DEFAULT_BASE_URL};
pub use embeddings::{OllamaEmbeddings, OllamaEmbeddingsConfig};
