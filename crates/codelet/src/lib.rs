//! Codelet: generate Python snippets through a prompt chain and check the
//! output with unit-test style assertions.
//!
//! This crate re-exports the codelet sub-crates for single-import usage.
//! Enable features to control which modules are available.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `runnables`, `prompts`, `parsers`, `callbacks` |
//! | `model-utils` | `ProviderBackend`, `HttpBackend`, `FakeBackend`, `ScriptedChatModel` |
//! | `ollama` | Ollama ChatModel + Embeddings |
//! | `embeddings` | `FakeEmbeddings` |
//! | `eval` | Evaluators, `expect` assertions, edit distance |
//! | `generator` | `Generator` and its configuration |
//! | `full` | All features enabled |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use codelet::generator::{Generator, GeneratorConfig};
//! use codelet::eval::expect;
//!
//! let generator = Generator::from_config(GeneratorConfig::from_env()?);
//! let output = generator.generate("How do I make a list in python?").await?;
//! expect(output).to_contain("[]")?;
//! ```

/// Core traits and types: ChatModel, Embeddings, Message, CodeletError, RunnableConfig.
/// Always available.
pub use codelet_core as core;

/// ProviderBackend abstraction and ScriptedChatModel.
#[cfg(feature = "model-utils")]
pub use codelet_models as models;

/// Ollama ChatModel and Embeddings.
#[cfg(feature = "ollama")]
pub use codelet_ollama as ollama;

/// Runnable trait, BoxRunnable and `|` composition.
#[cfg(feature = "runnables")]
pub use codelet_runnables as runnables;

/// PromptTemplate with `{{ var }}` slots.
#[cfg(feature = "prompts")]
pub use codelet_prompts as prompts;

/// StrOutputParser.
#[cfg(feature = "parsers")]
pub use codelet_parsers as parsers;

/// TracingCallback and RecordingCallback.
#[cfg(feature = "callbacks")]
pub use codelet_callbacks as callbacks;

/// FakeEmbeddings.
#[cfg(feature = "embeddings")]
pub use codelet_embeddings as embeddings;

/// Evaluators, `expect` assertions, embedding and edit distance.
#[cfg(feature = "eval")]
pub use codelet_eval as eval;

/// The Python snippet Generator.
#[cfg(feature = "generator")]
pub use codelet_generator as generator;
