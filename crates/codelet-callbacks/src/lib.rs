//! Run-event handlers for the generator: one that logs through `tracing`, one
//! that keeps events around for inspection in tests.

mod recording;
mod tracing_cb;

pub use recording::RecordingCallback;
pub use tracing_cb::TracingCallback;
