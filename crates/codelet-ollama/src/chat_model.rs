use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{ChatModel, ChatRequest, ChatResponse, CodeletError, Message, Role, TokenUsage};
use codelet_models::{ProviderBackend, ProviderRequest};
use serde::{Deserialize, Serialize};

use crate::api::{api_error, endpoint};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Sampling options. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OllamaOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl OllamaOptions {
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub model: String,
    pub base_url: String,
    #[serde(default)]
    pub options: OllamaOptions,
}

impl OllamaConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            options: OllamaOptions::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }
}

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a OllamaOptions>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a Message> for WireMessage<'a> {
    fn from(message: &'a Message) -> Self {
        let role = match message.role() {
            Role::System => "system",
            Role::Human => "user",
            Role::Ai => "assistant",
        };
        Self {
            role,
            content: message.content(),
        }
    }
}

#[derive(Deserialize)]
struct ChatReply {
    message: Option<ReplyMessage>,
    prompt_eval_count: Option<u64>,
    eval_count: Option<u64>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// `POST /api/chat` without streaming.
pub struct OllamaChatModel {
    config: OllamaConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl OllamaChatModel {
    pub fn new(config: OllamaConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn build_request(&self, request: &ChatRequest) -> Result<ProviderRequest, CodeletError> {
        let body = ChatBody {
            model: &self.config.model,
            messages: request.messages.iter().map(WireMessage::from).collect(),
            stream: false,
            options: (!self.config.options.is_unset()).then_some(&self.config.options),
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| CodeletError::Parsing(format!("encoding Ollama chat request: {e}")))?;
        Ok(ProviderRequest::post_json(
            endpoint(&self.config.base_url, "chat"),
            body,
        ))
    }
}

#[async_trait]
impl ChatModel for OllamaChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, CodeletError> {
        let provider_request = self.build_request(&request)?;
        tracing::debug!(
            model = %self.config.model,
            messages = request.messages.len(),
            "calling Ollama chat"
        );

        let response = self.backend.send(provider_request).await?;
        if let Some(message) = api_error(&response) {
            return Err(CodeletError::Model(message));
        }

        let reply: ChatReply = serde_json::from_value(response.body.clone())
            .map_err(|e| CodeletError::Parsing(format!("unexpected Ollama chat reply: {e}")))?;
        let content = reply.message.map(|m| m.content).ok_or_else(|| {
            CodeletError::Parsing(format!(
                "Ollama reply has no message content: {}",
                response.body
            ))
        })?;
        let usage = match (reply.prompt_eval_count, reply.eval_count) {
            (Some(input), Some(output)) => Some(TokenUsage::from_counts(input, output)),
            _ => None,
        };

        Ok(ChatResponse {
            message: Message::ai(content),
            usage,
        })
    }
}
