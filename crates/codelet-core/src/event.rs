use serde::{Deserialize, Serialize};

/// What happened during one generation run. Every event of a run shares its `run_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    RunStarted { run_id: String, project: String },
    LlmCalled { run_id: String, message_count: usize },
    RunFinished { run_id: String, output: String },
    RunFailed { run_id: String, error: String },
}

impl RunEvent {
    pub fn run_id(&self) -> &str {
        match self {
            RunEvent::RunStarted { run_id, .. }
            | RunEvent::LlmCalled { run_id, .. }
            | RunEvent::RunFinished { run_id, .. }
            | RunEvent::RunFailed { run_id, .. } => run_id,
        }
    }

    /// Snake-case name of the event, as used in its serialized `event` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            RunEvent::RunStarted { .. } => "run_started",
            RunEvent::LlmCalled { .. } => "llm_called",
            RunEvent::RunFinished { .. } => "run_finished",
            RunEvent::RunFailed { .. } => "run_failed",
        }
    }
}
