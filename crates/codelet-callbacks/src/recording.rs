use std::sync::Arc;

use async_trait::async_trait;
use codelet_core::{CallbackHandler, CodeletError, RunEvent};
use tokio::sync::Mutex;

/// Keeps every event it receives, in arrival order.
///
/// Clones share the same log, so a test can hand one clone to a `Generator`
/// and read the events back through another.
#[derive(Debug, Default, Clone)]
pub struct RecordingCallback {
    log: Arc<Mutex<Vec<RunEvent>>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<RunEvent> {
        self.log.lock().await.clone()
    }

    /// Events of a single run.
    pub async fn events_for(&self, run_id: &str) -> Vec<RunEvent> {
        self.log
            .lock()
            .await
            .iter()
            .filter(|event| event.run_id() == run_id)
            .cloned()
            .collect()
    }

    /// Event kinds in order, e.g. `["run_started", "llm_called", "run_finished"]`.
    pub async fn kinds(&self) -> Vec<&'static str> {
        self.log.lock().await.iter().map(RunEvent::kind).collect()
    }
}

#[async_trait]
impl CallbackHandler for RecordingCallback {
    async fn on_event(&self, event: RunEvent) -> Result<(), CodeletError> {
        self.log.lock().await.push(event);
        Ok(())
    }
}
