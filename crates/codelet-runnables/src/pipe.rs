use std::ops::BitOr;

use async_trait::async_trait;
use codelet_core::{CodeletError, RunnableConfig};

use crate::runnable::{BoxRunnable, Runnable};

/// `head` then `tail`, both seeing the same config. The first error stops the run.
pub struct RunnableSequence<I: Send + 'static, M: Send + 'static, O: Send + 'static> {
    head: BoxRunnable<I, M>,
    tail: BoxRunnable<M, O>,
}

impl<I: Send + 'static, M: Send + 'static, O: Send + 'static> RunnableSequence<I, M, O> {
    pub fn new(head: BoxRunnable<I, M>, tail: BoxRunnable<M, O>) -> Self {
        Self { head, tail }
    }
}

#[async_trait]
impl<I: Send + 'static, M: Send + 'static, O: Send + 'static> Runnable<I, O>
    for RunnableSequence<I, M, O>
{
    async fn invoke(&self, input: I, config: &RunnableConfig) -> Result<O, CodeletError> {
        let intermediate = self.head.invoke(input, config).await?;
        self.tail.invoke(intermediate, config).await
    }
}

impl<I: Send + 'static, M: Send + 'static, O: Send + 'static> BitOr<BoxRunnable<M, O>>
    for BoxRunnable<I, M>
{
    type Output = BoxRunnable<I, O>;

    fn bitor(self, tail: BoxRunnable<M, O>) -> Self::Output {
        BoxRunnable::new(RunnableSequence::new(self, tail))
    }
}
