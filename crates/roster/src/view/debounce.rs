//! A cancellable delayed publish.
//!
//! [`Debouncer`] holds at most one pending value. Scheduling a new value
//! aborts the pending task, so only the last value scheduled within a quiet
//! period is ever published to the watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;

/// Publishes the last scheduled value once no new value has arrived for
/// `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: Arc<watch::Sender<T>>,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer publishing to a fresh channel seeded with
    /// `initial`, and return the receiving side.
    #[must_use]
    pub fn new(delay: Duration, initial: T) -> (Self, watch::Receiver<T>) {
        let (tx, rx) = watch::channel(initial);
        let debouncer = Self {
            delay,
            settled: Arc::new(tx),
            pending: None,
        };
        (debouncer, rx)
    }

    /// The quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for publication, replacing any pending value.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let settled = Arc::clone(&self.settled);
        let delay = self.delay;
        let published = value.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            settled.send_replace(published);
        });

        trace!(delay_ms = delay.as_millis(), "Debounce scheduled");
        self.pending = Some(Pending { value, task });
    }

    /// Drop the pending value without publishing it. Returns `true` if a
    /// value was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let was_pending = !pending.task.is_finished();
                pending.task.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Publish the pending value now instead of waiting out the delay.
    /// Returns `true` if a value was published.
    pub fn flush(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.task.is_finished() {
            return false;
        }
        pending.task.abort();
        self.settled.send_replace(pending.value);
        true
    }

    /// Whether a value is waiting out the delay.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.task.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }
}
