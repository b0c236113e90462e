//! Streaming search: matches are produced incrementally by a background task
//! and delivered in input order.

use super::config_accessors;
use crate::query::SearchQuery;
use futures::Stream;
use futures::stream::FusedStream;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};
use tagsift_core::types::{SearchConfig, TagExtractor};
use tagsift_core::{Result, SearchError};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Matches buffered ahead of the consumer before the producer waits.
pub const DEFAULT_STREAM_BUFFER: usize = 16;

/// Streaming search engine.
///
/// Each [`search`](Self::search) call returns a fresh [`SearchStream`]; the
/// scan only starts when the stream is first polled, and then runs on tokio's
/// blocking pool so tag extraction never stalls the async workers.
#[derive(Debug, Clone)]
pub struct AsyncSearchEngine {
    config: SearchConfig,
    buffer: usize,
}

impl Default for AsyncSearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AsyncSearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            buffer: DEFAULT_STREAM_BUFFER,
        }
    }

    /// Creates an engine whose streams buffer at most `buffer` matches.
    pub fn with_buffer(config: SearchConfig, buffer: usize) -> Result<Self> {
        if buffer == 0 {
            return Err(SearchError::InvalidConfiguration(
                "stream buffer capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self { config, buffer })
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }
}

config_accessors!(AsyncSearchEngine);

/// Search operations.
impl AsyncSearchEngine {
    /// Returns a lazy stream of the items matching `query`.
    ///
    /// The query is normalized against the current config right away, so later
    /// config changes do not affect a stream already handed out. Yields the
    /// same items in the same order as [`SyncSearchEngine::search`](super::SyncSearchEngine::search).
    ///
    /// # Panics
    ///
    /// The returned stream panics if it is first polled outside a tokio runtime.
    pub fn search<T, I, E>(&self, query: &str, items: I, extractor: E) -> SearchStream<T>
    where
        T: Clone + Send + Sync + 'static,
        I: Into<Arc<[T]>>,
        E: TagExtractor<T> + 'static,
    {
        let job = ScanJob {
            query: SearchQuery::new(query, self.config),
            items: items.into(),
            extractor: Arc::new(extractor),
        };

        SearchStream {
            state: State::Pending(job),
            cancel: CancellationToken::new(),
            buffer: self.buffer,
        }
    }
}

/// Everything a producer task needs; moved into the task on first poll.
struct ScanJob<T> {
    query: SearchQuery,
    items: Arc<[T]>,
    extractor: Arc<dyn TagExtractor<T>>,
}

impl<T: Clone + Send + Sync + 'static> ScanJob<T> {
    /// Runs on a blocking-pool thread. Cancellation is checked before every
    /// item, so a long run of non-matching items still stops promptly.
    fn run(self, tx: mpsc::Sender<Result<T>>, cancel: CancellationToken, handle: Handle) {
        let total = self.items.len();
        let deliver = |message: Result<T>| handle.block_on(send(&tx, &cancel, message));

        if self.query.is_empty() {
            tracing::debug!(items = total, show_all = self.query.shows_all(), "empty query");
            if !self.query.shows_all() {
                return;
            }
            for item in self.items.iter() {
                if cancel.is_cancelled() || !deliver(Ok(item.clone())) {
                    return;
                }
            }
            return;
        }

        let mut matched = 0usize;
        for (index, item) in self.items.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::debug!(index, matched, "streaming search cancelled");
                return;
            }

            match self.query.matches_item(item, self.extractor.as_ref(), index) {
                Ok(false) => {}
                Ok(true) => {
                    tracing::trace!(index, "item matched");
                    matched += 1;
                    if !deliver(Ok(item.clone())) {
                        tracing::debug!(index, matched, "streaming search cancelled");
                        return;
                    }
                }
                Err(err) => {
                    deliver(Err(err));
                    return;
                }
            }
        }

        tracing::debug!(
            query = self.query.as_str(),
            items = total,
            matched,
            "streaming search finished"
        );
    }
}

/// Sends one message unless cancelled first. Returns false if the consumer
/// is gone or cancellation won.
async fn send<T>(tx: &mpsc::Sender<T>, cancel: &CancellationToken, message: T) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = tx.send(message) => sent.is_ok(),
    }
}

enum State<T> {
    Pending(ScanJob<T>),
    Running(mpsc::Receiver<Result<T>>),
    Done,
}

/// Lazy, cancellable sequence of matching items.
///
/// Not restartable: a second scan needs a new `search` call. Dropping the
/// stream cancels the producer. A failed extraction is yielded once as an
/// `Err`, after which the stream ends.
///
/// # Panics
///
/// Polling panics outside a tokio runtime, since the first poll spawns the
/// producer onto the runtime's blocking pool.
pub struct SearchStream<T> {
    state: State<T>,
    cancel: CancellationToken,
    buffer: usize,
}

impl<T> SearchStream<T> {
    /// Stops the scan. No item is yielded after this returns.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Token that cancels this stream when triggered from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn finish(&mut self) {
        self.state = State::Done;
    }
}

impl<T: Clone + Send + Sync + 'static> SearchStream<T> {
    fn start(&mut self) {
        let State::Pending(job) = std::mem::replace(&mut self.state, State::Done) else {
            return;
        };
        let (tx, rx) = mpsc::channel(self.buffer);
        let cancel = self.cancel.clone();
        let handle = Handle::current();
        tokio::task::spawn_blocking(move || job.run(tx, cancel, handle));
        self.state = State::Running(rx);
    }
}

impl<T: Clone + Send + Sync + 'static> Stream for SearchStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.cancel.is_cancelled() {
            this.finish();
            return Poll::Ready(None);
        }

        if matches!(this.state, State::Pending(_)) {
            this.start();
        }

        let State::Running(rx) = &mut this.state else {
            return Poll::Ready(None);
        };

        match ready!(rx.poll_recv(cx)) {
            Some(Ok(item)) => Poll::Ready(Some(Ok(item))),
            Some(Err(err)) => {
                this.finish();
                Poll::Ready(Some(Err(err)))
            }
            None => {
                this.finish();
                Poll::Ready(None)
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> FusedStream for SearchStream<T> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done) || self.cancel.is_cancelled()
    }
}

impl<T> Drop for SearchStream<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
