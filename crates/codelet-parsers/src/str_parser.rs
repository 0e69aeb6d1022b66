use async_trait::async_trait;
use codelet_core::{CodeletError, Message, RunnableConfig};
use codelet_runnables::Runnable;

/// Extracts the text content from a Message, unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrOutputParser;

#[async_trait]
impl Runnable<Message, String> for StrOutputParser {
    async fn invoke(
        &self,
        input: Message,
        _config: &RunnableConfig,
    ) -> Result<String, CodeletError> {
        Ok(input.content().to_string())
    }
}
