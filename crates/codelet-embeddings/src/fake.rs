use async_trait::async_trait;
use codelet_core::{CodeletError, Embeddings};

/// Offline stand-in for an embedding model.
///
/// A text becomes a unit-length character histogram: each character lands
/// in bucket `code point % dimensions`. Texts built from the same characters
/// are close and texts with disjoint buckets are orthogonal, which is enough
/// to exercise distance thresholds without a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeEmbeddings {
    dimensions: usize,
}

impl FakeEmbeddings {
    pub const DEFAULT_DIMENSIONS: usize = 16;

    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn histogram(&self, text: &str) -> Vec<f32> {
        let mut buckets = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return buckets;
        }
        for c in text.chars() {
            buckets[c as usize % self.dimensions] += 1.0;
        }
        let norm = buckets.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            buckets.iter_mut().for_each(|x| *x /= norm);
        }
        buckets
    }
}

impl Default for FakeEmbeddings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl Embeddings for FakeEmbeddings {
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, CodeletError> {
        Ok(texts.iter().map(|text| self.histogram(text)).collect())
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, CodeletError> {
        Ok(self.histogram(text))
    }
}
