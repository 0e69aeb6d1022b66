mod fake;

pub use codelet_core::Embeddings;
pub use fake::FakeEmbeddings;
