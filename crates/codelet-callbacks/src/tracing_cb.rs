use async_trait::async_trait;
use codelet_core::{CallbackHandler, CodeletError, RunEvent};

/// Logs run events through `tracing`.
///
/// Every line carries the handler's project, including `run_started`: the
/// project named inside that event is not logged.
#[derive(Debug, Clone)]
pub struct TracingCallback {
    project: String,
}

impl TracingCallback {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

impl Default for TracingCallback {
    fn default() -> Self {
        Self::new("default")
    }
}

#[async_trait]
impl CallbackHandler for TracingCallback {
    async fn on_event(&self, event: RunEvent) -> Result<(), CodeletError> {
        let project = self.project.as_str();
        let run_id = event.run_id();
        let kind = event.kind();
        match &event {
            RunEvent::RunStarted { .. } => {
                tracing::info!(%run_id, %project, event = kind, "run started");
            }
            RunEvent::LlmCalled { message_count, .. } => {
                tracing::info!(
                    %run_id,
                    %project,
                    event = kind,
                    message_count,
                    "chat model called"
                );
            }
            RunEvent::RunFinished { output, .. } => {
                tracing::info!(
                    %run_id,
                    %project,
                    event = kind,
                    output_len = output.len(),
                    "run finished"
                );
            }
            RunEvent::RunFailed { error, .. } => {
                tracing::error!(%run_id, %project, event = kind, %error, "run failed");
            }
        }
        Ok(())
    }
}
