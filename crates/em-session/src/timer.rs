//! One-shot delayed work that can be cancelled.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A job that runs once after a delay and sends its output to a channel.
///
/// Cancelling (or dropping) the timer aborts the job if it has not run yet.
/// Once the job has run, cancelling is a no-op; its output may already be
/// sitting in the channel.
#[derive(Debug)]
pub struct DelayTimer {
    handle: JoinHandle<()>,
}

impl DelayTimer {
    /// Schedule `job` to run after `delay` on the current tokio runtime.
    ///
    /// The deadline is fixed at the moment of scheduling, not when the task
    /// is first polled.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn schedule<T, F>(delay: Duration, tx: UnboundedSender<T>, job: F) -> Self
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the owner was torn down.
            let _ = tx.send(job());
        });
        Self { handle }
    }

    /// Prevent the job from running if it has not already.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for DelayTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
