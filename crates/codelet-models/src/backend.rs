use std::collections::VecDeque;

use async_trait::async_trait;
use codelet_core::CodeletError;
use serde_json::Value;
use tokio::sync::Mutex;

/// A JSON POST to a provider endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl ProviderRequest {
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }
}

/// Status and decoded JSON body of a provider reply. An empty body decodes to `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: Value,
}

impl ProviderResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// 4xx and 5xx replies.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// The body's `error` string if there is one, otherwise the whole body.
    pub fn error_message(&self) -> String {
        match self.body.get("error").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => self.body.to_string(),
        }
    }
}

/// Everything a model adapter needs from the network.
#[async_trait]
pub trait ProviderBackend: Send + Sync {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, CodeletError>;
}

/// Sends requests with reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderBackend for HttpBackend {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, CodeletError> {
        let builder = request
            .headers
            .iter()
            .fold(self.client.post(&request.url), |builder, (name, value)| {
                builder.header(name, value)
            })
            .json(&request.body);

        let response = builder
            .send()
            .await
            .map_err(|e| CodeletError::Model(format!("request to {} failed: {e}", request.url)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CodeletError::Model(format!("reading reply from {}: {e}", request.url)))?;
        tracing::debug!(url = %request.url, status, bytes = text.len(), "provider replied");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                CodeletError::Parsing(format!("reply from {} is not JSON: {e}", request.url))
            })?
        };
        Ok(ProviderResponse::new(status, body))
    }
}

/// Replays a fixed script of replies and keeps every request it was sent.
/// Once the script runs out, `send` fails with `CodeletError::Model`.
#[derive(Default)]
pub struct FakeBackend {
    script: Mutex<VecDeque<Result<ProviderResponse, CodeletError>>>,
    received: Mutex<Vec<ProviderRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: ProviderResponse) -> Self {
        self.script.get_mut().push_back(Ok(response));
        self
    }

    pub fn with_error(mut self, error: CodeletError) -> Self {
        self.script.get_mut().push_back(Err(error));
        self
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl ProviderBackend for FakeBackend {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, CodeletError> {
        let url = request.url.clone();
        self.received.lock().await.push(request);
        self.script.lock().await.pop_front().unwrap_or_else(|| {
            Err(CodeletError::Model(format!(
                "fake backend has no reply left for {url}"
            )))
        })
    }
}
