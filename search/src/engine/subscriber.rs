use super::SearchStream;
use futures::StreamExt;
use std::ops::ControlFlow;
use tagsift_core::SearchError;

/// Receives the notifications of one streaming search.
///
/// Zero or more `on_next` calls followed by exactly one of `on_complete` or
/// `on_error`, unless the subscriber breaks out early (then neither is called).
pub trait Subscriber<T> {
    /// Return `ControlFlow::Break(())` to cancel the rest of the scan.
    fn on_next(&mut self, item: T) -> ControlFlow<()>;

    fn on_error(&mut self, _error: SearchError) {}

    fn on_complete(&mut self) {}
}

impl<T, F> Subscriber<T> for F
where
    F: FnMut(T) -> ControlFlow<()>,
{
    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        self(item)
    }
}

/// How a subscription ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    /// Every match was delivered.
    Completed { delivered: usize },
    /// The subscriber or a cancellation token stopped the scan early.
    Cancelled { delivered: usize },
    /// The tag extractor failed; `delivered` matches preceded the error.
    Failed {
        delivered: usize,
        error: SearchError,
    },
}

impl SubscriptionOutcome {
    pub fn delivered(&self) -> usize {
        match self {
            Self::Completed { delivered }
            | Self::Cancelled { delivered }
            | Self::Failed { delivered, .. } => *delivered,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> SearchStream<T> {
    /// Drives the stream to its end, pushing every notification to `subscriber`.
    pub async fn subscribe<S>(mut self, subscriber: &mut S) -> SubscriptionOutcome
    where
        S: Subscriber<T> + ?Sized,
    {
        let mut delivered = 0;

        while let Some(next) = self.next().await {
            match next {
                Ok(item) => {
                    delivered += 1;
                    if subscriber.on_next(item).is_break() {
                        self.cancel();
                        return SubscriptionOutcome::Cancelled { delivered };
                    }
                }
                Err(error) => {
                    subscriber.on_error(error.clone());
                    return SubscriptionOutcome::Failed { delivered, error };
                }
            }
        }

        if self.is_cancelled() {
            return SubscriptionOutcome::Cancelled { delivered };
        }

        subscriber.on_complete();
        SubscriptionOutcome::Completed { delivered }
    }
}
