//! Shared vocabulary of the codelet crates: messages, run events, the error
//! type, and the seams models, embedders and callbacks plug into.

mod error;
mod event;
mod message;
mod run_config;

use async_trait::async_trait;

pub use error::CodeletError;
pub use event::RunEvent;
pub use message::{ChatRequest, ChatResponse, Message, Role, TokenUsage};
pub use run_config::RunnableConfig;

/// A chat-completion model: one request in, one reply out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, CodeletError>;
}

/// Turns text into vectors for semantic comparison.
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// One vector per input, in input order.
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, CodeletError>;

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, CodeletError>;
}

/// Receives run lifecycle events. An error aborts the step that emitted it.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    async fn on_event(&self, event: RunEvent) -> Result<(), CodeletError>;
}
