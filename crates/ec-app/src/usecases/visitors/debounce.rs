//! Trailing-edge debounce: a delayed task that is cancelled and re-armed on
//! every new input.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<AbortHandle>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `task` once `delay` has elapsed without another call to
    /// `schedule`. A previously scheduled task that has not fired yet is
    /// discarded.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + self.delay;
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            task.await;
        });
        *pending = Some(handle.abort_handle());
    }

    /// Discards the pending task. Returns `true` if one was still waiting.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.take() {
            Some(handle) => {
                let was_waiting = !handle.is_finished();
                handle.abort();
                was_waiting
            }
            None => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
