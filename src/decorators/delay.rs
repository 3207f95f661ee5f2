use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::UnderbarError;

/// Handle to a pending [`delay`] invocation.
///
/// Dropping the handle does not cancel the invocation; call
/// [`cancel`](Self::cancel) for that.
pub struct DelayHandle<R> {
    task: JoinHandle<R>,
    wait: Duration,
}

/// Schedule `func(args)` to run once `wait` has elapsed, without blocking.
///
/// The invocation runs on the tokio runtime the caller is executing in.
/// Separate `delay` calls are independent: each fires no earlier than its own
/// wait, with no ordering promised between them beyond that.
///
/// # Errors
///
/// [`UnderbarError::NoScheduler`] when called outside a tokio runtime.
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> Result<DelayHandle<R>, UnderbarError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| UnderbarError::NoScheduler)?;
    let task = runtime.spawn(async move {
        tokio::time::sleep(wait).await;
        trace!(?wait, "delay: firing");
        func(args)
    });
    debug!(?wait, "delay: scheduled");
    Ok(DelayHandle { task, wait })
}

impl<R> DelayHandle<R> {
    /// Cancel the invocation if it has not fired yet. No-op afterwards.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!(wait = ?self.wait, "delay: cancelled");
        }
        self.task.abort();
    }

    /// True once the invocation has run or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait the invocation was scheduled with.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Wait for the invocation and return its result, or `None` if it was
    /// cancelled. A panic inside the function is resumed here.
    pub async fn join(self) -> Option<R> {
        match self.task.await {
            Ok(result) => Some(result),
            Err(err) if err.is_cancelled() => None,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

impl<R> fmt::Debug for DelayHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayHandle")
            .field("wait", &self.wait)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}
