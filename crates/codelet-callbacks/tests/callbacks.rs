use std::io;
use std::sync::{Arc, Mutex};

use codelet_callbacks::{RecordingCallback, TracingCallback};
use codelet_core::{CallbackHandler, RunEvent};

fn started(run_id: &str) -> RunEvent {
    RunEvent::RunStarted {
        run_id: run_id.to_string(),
        project: "Eval Unit Testing".to_string(),
    }
}

fn finished(run_id: &str, output: &str) -> RunEvent {
    RunEvent::RunFinished {
        run_id: run_id.to_string(),
        output: output.to_string(),
    }
}

/// Collects formatted log lines so tests can read them back.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(buffer: &LogBuffer) -> tracing::subscriber::DefaultGuard {
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[tokio::test]
async fn records_events_in_order() {
    let callback = RecordingCallback::new();

    callback.on_event(started("run-1")).await.unwrap();
    callback
        .on_event(finished("run-1", "for i in range(10):"))
        .await
        .unwrap();

    assert_eq!(callback.kinds().await, vec!["run_started", "run_finished"]);
    let events = callback.events().await;
    assert_eq!(events[1], finished("run-1", "for i in range(10):"));
}

#[tokio::test]
async fn clones_share_one_log() {
    let callback = RecordingCallback::new();
    let handle: Arc<dyn CallbackHandler> = Arc::new(callback.clone());

    handle.on_event(started("run-1")).await.unwrap();
    assert_eq!(callback.events().await.len(), 1);
}

#[tokio::test]
async fn events_for_filters_by_run() {
    let callback = RecordingCallback::new();
    callback.on_event(started("a")).await.unwrap();
    callback.on_event(started("b")).await.unwrap();
    callback.on_event(finished("a", "[]")).await.unwrap();

    let run_a = callback.events_for("a").await;
    assert_eq!(run_a, vec![started("a"), finished("a", "[]")]);
    assert!(callback.events_for("missing").await.is_empty());
}

#[tokio::test]
async fn tracing_callback_handles_all_events() {
    let cb = TracingCallback::new("Eval Unit Testing");
    assert_eq!(cb.project(), "Eval Unit Testing");

    cb.on_event(started("r1")).await.unwrap();
    cb.on_event(RunEvent::LlmCalled {
        run_id: "r1".to_string(),
        message_count: 1,
    })
    .await
    .unwrap();
    cb.on_event(finished("r1", "done")).await.unwrap();
    cb.on_event(RunEvent::RunFailed {
        run_id: "r1".to_string(),
        error: "connection refused".to_string(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn every_line_names_the_handlers_project() {
    let buffer = LogBuffer::default();
    let _guard = capture_logs(&buffer);

    let cb = TracingCallback::new("other");
    cb.on_event(started("r1")).await.unwrap();
    cb.on_event(finished("r1", "x = 1")).await.unwrap();

    let logs = buffer.contents();
    assert_eq!(logs.lines().count(), 2);
    assert!(logs.lines().all(|line| line.contains("project=other")));
    assert!(!logs.contains("Eval Unit Testing"));
    assert!(logs.contains("run_started"));
}
