use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{
    CallbackHandler, ChatModel, ChatRequest, CodeletError, Message, RunEvent, RunnableConfig,
};
use codelet_parsers::StrOutputParser;
use codelet_prompts::PromptTemplate;
use codelet_runnables::{BoxRunnable, Runnable};
use serde_json::Value;

/// Adapts a `ChatModel` into a chain step: messages in, reply message out.
///
/// When a callback is attached, an `LlmCalled` event is sent before the call,
/// keyed by the run id in the invocation config.
pub struct ChatModelStep {
    model: Arc<dyn ChatModel>,
    callback: Option<Arc<dyn CallbackHandler>>,
}

impl ChatModelStep {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            callback: None,
        }
    }

    pub fn with_callback(mut self, callback: Option<Arc<dyn CallbackHandler>>) -> Self {
        self.callback = callback;
        self
    }
}

#[async_trait]
impl Runnable<Vec<Message>, Message> for ChatModelStep {
    async fn invoke(
        &self,
        messages: Vec<Message>,
        config: &RunnableConfig,
    ) -> Result<Message, CodeletError> {
        if let Some(callback) = &self.callback {
            callback
                .on_event(RunEvent::LlmCalled {
                    run_id: config.run_id.clone().unwrap_or_default(),
                    message_count: messages.len(),
                })
                .await?;
        }
        let response = self.model.chat(ChatRequest::new(messages)).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "model replied"
            );
        }
        Ok(response.message)
    }
}

/// `prompt | model | StrOutputParser`.
pub fn build_chain(
    prompt: PromptTemplate,
    model: Arc<dyn ChatModel>,
    callback: Option<Arc<dyn CallbackHandler>>,
) -> BoxRunnable<HashMap<String, Value>, String> {
    prompt.boxed()
        | ChatModelStep::new(model).with_callback(callback).boxed()
        | StrOutputParser.boxed()
}
