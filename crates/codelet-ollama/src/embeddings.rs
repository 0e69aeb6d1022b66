use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{CodeletError, Embeddings};
use codelet_models::{ProviderBackend, ProviderRequest};
use serde::{Deserialize, Serialize};

use crate::api::{api_error, endpoint};
use crate::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaEmbeddingsConfig {
    pub model: String,
    pub base_url: String,
}

impl OllamaEmbeddingsConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct EmbedBody<'a> {
    model: &'a str,
    input: EmbedInput<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EmbedInput<'a> {
    One(&'a str),
    Many(&'a [&'a str]),
}

#[derive(Deserialize)]
struct EmbedReply {
    embeddings: Option<Vec<Vec<f32>>>,
}

/// `POST /api/embed`. A batch of texts goes out as a single request.
pub struct OllamaEmbeddings {
    config: OllamaEmbeddingsConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl OllamaEmbeddings {
    pub fn new(config: OllamaEmbeddingsConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    async fn embed(
        &self,
        input: EmbedInput<'_>,
        expected: usize,
    ) -> Result<Vec<Vec<f32>>, CodeletError> {
        let body = serde_json::to_value(EmbedBody {
            model: &self.config.model,
            input,
        })
        .map_err(|e| CodeletError::Embedding(format!("encoding Ollama embed request: {e}")))?;
        let request = ProviderRequest::post_json(endpoint(&self.config.base_url, "embed"), body);

        let response = self.backend.send(request).await?;
        if let Some(message) = api_error(&response) {
            return Err(CodeletError::Embedding(message));
        }

        let reply: EmbedReply = serde_json::from_value(response.body)
            .map_err(|e| CodeletError::Embedding(format!("unexpected Ollama embed reply: {e}")))?;
        let vectors = reply
            .embeddings
            .ok_or_else(|| CodeletError::Embedding("missing 'embeddings' field".to_string()))?;
        if vectors.len() != expected {
            return Err(CodeletError::Embedding(format!(
                "asked for {expected} embeddings, Ollama returned {}",
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}

#[async_trait]
impl Embeddings for OllamaEmbeddings {
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, CodeletError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.embed(EmbedInput::Many(texts), texts.len()).await
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, CodeletError> {
        let mut vectors = self.embed(EmbedInput::One(text), 1).await?;
        Ok(vectors.swap_remove(0))
    }
}
