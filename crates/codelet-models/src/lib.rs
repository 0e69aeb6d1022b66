//! The network seam model adapters talk through, plus test doubles.

mod backend;
mod scripted;

pub use backend::{FakeBackend, HttpBackend, ProviderBackend, ProviderRequest, ProviderResponse};
pub use scripted::ScriptedChatModel;
