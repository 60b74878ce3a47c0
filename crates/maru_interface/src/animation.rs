//! Animation engine capability and its completion signal.

use maru_core::{ElementId, Property, Tween};
use maru_error::{AnimationError, AnimationErrorKind, MaruError, MaruResult};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Tween scheduler.
///
/// `tween` starts the animation before it returns; awaiting the returned
/// [`Completion`] is optional. Dropping it is the fire-and-forget case.
pub trait AnimationEngine: Send + Sync {
    /// Apply properties immediately, without animating.
    fn set(&self, target: &ElementId, properties: &[Property]);

    /// Schedule a tween and return its completion signal.
    fn tween(&self, tween: Tween) -> Completion;
}

/// Sending half of a [`Completion`], held by the engine.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: oneshot::Sender<MaruResult<()>>,
}

impl CompletionSignal {
    /// Report that the tween reached its end values.
    pub fn complete(self) {
        // The receiver may have been dropped; fire-and-forget callers do that.
        let _ = self.tx.send(Ok(()));
    }

    /// Report that the tween could not finish.
    pub fn fail(self, error: impl Into<MaruError>) {
        let _ = self.tx.send(Err(error.into()));
    }
}

/// Resolves once when a tween settles.
///
/// If the engine drops the [`CompletionSignal`] without reporting, the
/// completion resolves with [`AnimationErrorKind::Dropped`] rather than
/// hanging forever.
#[derive(Debug)]
pub struct Completion {
    target: ElementId,
    rx: oneshot::Receiver<MaruResult<()>>,
}

impl Completion {
    /// Create a linked signal/completion pair for a tween on `target`.
    pub fn channel(target: ElementId) -> (CompletionSignal, Completion) {
        let (tx, rx) = oneshot::channel();
        (CompletionSignal { tx }, Completion { target, rx })
    }

    /// A completion that has already resolved successfully.
    pub fn ready(target: ElementId) -> Self {
        let (signal, completion) = Self::channel(target);
        signal.complete();
        completion
    }

    /// Element the tween addressed.
    pub fn target(&self) -> &ElementId {
        &self.target
    }
}

impl Future for Completion {
    type Output = MaruResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let polled = Pin::new(&mut self.rx).poll(cx);
        match polled {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(AnimationError::new(
                AnimationErrorKind::Dropped(self.target.to_string()),
            )
            .into())),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maru_error::MaruErrorKind;

    #[tokio::test]
    async fn ready_completion_resolves_ok() {
        let completion = Completion::ready(ElementId::container());
        assert!(completion.await.is_ok());
    }

    #[tokio::test]
    async fn dropped_signal_resolves_with_error() {
        let (signal, completion) = Completion::channel(ElementId::progress());
        drop(signal);

        let err = completion.await.unwrap_err();
        assert!(matches!(err.kind(), MaruErrorKind::Animation(_)));
    }

    #[tokio::test]
    async fn failed_signal_carries_the_error() {
        let (signal, completion) = Completion::channel(ElementId::root());
        signal.fail(AnimationError::new(AnimationErrorKind::Rejected {
            target: ":root".to_string(),
            reason: "no such property".to_string(),
        }));

        assert!(completion.await.is_err());
    }
}
