use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{ChatModel, ChatRequest, ChatResponse, CodeletError};
use tokio::sync::Mutex;

#[derive(Default)]
struct Script {
    replies: VecDeque<ChatResponse>,
    seen: Vec<ChatRequest>,
}

/// A `ChatModel` that answers from a script, in order.
///
/// Clones share the script, so a test can keep one handle to inspect the
/// requests while the generator owns another.
#[derive(Clone, Default)]
pub struct ScriptedChatModel {
    script: Arc<Mutex<Script>>,
}

impl ScriptedChatModel {
    pub fn new(replies: Vec<ChatResponse>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                replies: replies.into(),
                seen: Vec::new(),
            })),
        }
    }

    pub fn from_texts<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::new(texts.into_iter().map(ChatResponse::text).collect())
    }

    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.script.lock().await.seen.clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, CodeletError> {
        let mut script = self.script.lock().await;
        script.seen.push(request);
        script
            .replies
            .pop_front()
            .ok_or_else(|| CodeletError::Model("scripted model exhausted its replies".to_string()))
    }
}
