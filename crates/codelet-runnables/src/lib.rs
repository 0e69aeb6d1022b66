//! Async chain steps and their composition with `|`.

mod pipe;
mod runnable;

pub use pipe::RunnableSequence;
pub use runnable::{BoxRunnable, Runnable};
