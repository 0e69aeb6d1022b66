use async_trait::async_trait;
use codelet_core::{CodeletError, RunnableConfig};

/// One async step of a chain, from `I` to `O`.
///
/// Prompt templates, the model step and output parsers all implement it, and
/// `boxed` turns any of them into a `BoxRunnable` that composes with `|`.
#[async_trait]
pub trait Runnable<I, O>: Send + Sync
where
    I: Send + 'static,
    O: Send + 'static,
{
    async fn invoke(&self, input: I, config: &RunnableConfig) -> Result<O, CodeletError>;

    fn boxed(self) -> BoxRunnable<I, O>
    where
        Self: Sized + 'static,
    {
        BoxRunnable::new(self)
    }
}

/// Owned, type-erased step. The unit of composition for `|`.
pub struct BoxRunnable<I: Send + 'static, O: Send + 'static>(Box<dyn Runnable<I, O>>);

impl<I: Send + 'static, O: Send + 'static> BoxRunnable<I, O> {
    pub fn new(step: impl Runnable<I, O> + 'static) -> Self {
        Self(Box::new(step))
    }
}

#[async_trait]
impl<I: Send + 'static, O: Send + 'static> Runnable<I, O> for BoxRunnable<I, O> {
    async fn invoke(&self, input: I, config: &RunnableConfig) -> Result<O, CodeletError> {
        self.0.invoke(input, config).await
    }
}
