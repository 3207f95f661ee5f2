use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use crate::UnderbarError;

/// Configuration for [`Throttled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Length of the window opened by each invocation.
    pub window: Duration,
}

impl ThrottleConfig {
    /// Validate and build a configuration. The window must be non-zero.
    pub fn new(window: Duration) -> Result<Self, UnderbarError> {
        if window.is_zero() {
            return Err(UnderbarError::InvalidConfiguration(
                "throttle window must be > 0".to_string(),
            ));
        }
        Ok(Self { window })
    }
}

/// Two-state window machine.
#[derive(Debug, Clone, Copy)]
enum WindowState {
    Idle,
    Active { started: Instant },
}

/// Leading-edge throttling wrapper.
///
/// # Algorithm
///
/// 1. **Idle:** the next call invokes the function immediately and opens a
///    window of `config.window`
/// 2. **Active:** calls are dropped; they are not queued, not replayed later,
///    and do not extend the window
/// 3. **Expiry:** once the window has elapsed the wrapper is idle again
///
/// Expiry is evaluated against the monotonic clock on each call rather than by
/// a timer task, so the wrapper works with or without a running runtime. Under
/// a paused tokio clock it follows virtual time.
pub struct Throttled<F> {
    func: F,
    config: ThrottleConfig,
    state: WindowState,
    dropped: u64,
}

/// Wrap `func` so it runs at most once per `window`.
///
/// # Errors
///
/// [`UnderbarError::InvalidConfiguration`] for a zero window.
pub fn throttle<F, A, R>(func: F, window: Duration) -> Result<Throttled<F>, UnderbarError>
where
    F: FnMut(A) -> R,
{
    Ok(Throttled::with_config(func, ThrottleConfig::new(window)?))
}

impl<F> Throttled<F> {
    /// Wrap `func` with an already validated configuration.
    pub fn with_config(func: F, config: ThrottleConfig) -> Self {
        Self {
            func,
            config,
            state: WindowState::Idle,
            dropped: 0,
        }
    }

    /// Invoke the function if idle. Returns `None` when the call is dropped.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let now = Instant::now();
        if let Some(remaining) = self.remaining_at(now) {
            self.dropped += 1;
            trace!(?remaining, dropped = self.dropped, "throttle: call dropped");
            return None;
        }
        self.state = WindowState::Active { started: now };
        trace!(window = ?self.config.window, "throttle: invoking, window opened");
        Some((self.func)(args))
    }

    /// True while a window is open.
    pub fn is_active(&self) -> bool {
        self.remaining().is_some()
    }

    /// Time left in the current window, or `None` when idle.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(Instant::now())
    }

    /// Calls dropped over the wrapper's lifetime.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Active configuration.
    pub fn config(&self) -> &ThrottleConfig {
        &self.config
    }

    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        match self.state {
            WindowState::Idle => None,
            WindowState::Active { started } => {
                let elapsed = now.saturating_duration_since(started);
                self.config.window.checked_sub(elapsed).filter(|left| !left.is_zero())
            }
        }
    }
}

impl<F> fmt::Debug for Throttled<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("dropped", &self.dropped)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::advance;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn test_zero_window_rejected() {
        let result = throttle(|()| (), Duration::ZERO);
        assert!(matches!(
            result,
            Err(UnderbarError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_invokes_once() {
        let calls = Cell::new(0);
        let mut ping = throttle(|()| calls.set(calls.get() + 1), WINDOW).expect("valid window");

        assert_eq!(ping.call(()), Some(()));
        for _ in 0..10 {
            assert_eq!(ping.call(()), None);
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(ping.dropped(), 10);
        assert!(ping.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_again_after_window() {
        let calls = Cell::new(0);
        let echo = |(n,): (u32,)| {
            calls.set(calls.get() + 1);
            n
        };
        let mut ping = throttle(echo, WINDOW).expect("valid window");

        assert_eq!(ping.call((1,)), Some(1));
        advance(WINDOW).await;
        assert!(!ping.is_active());
        assert_eq!(ping.call((2,)), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrappers_have_separate_windows() {
        let calls = Cell::new(0);
        let bump = |()| calls.set(calls.get() + 1);
        let mut first = throttle(bump, WINDOW).expect("valid window");
        let mut second = throttle(bump, WINDOW).expect("valid window");

        assert!(first.call(()).is_some());
        assert!(first.call(()).is_none());
        // The other wrapper is still idle
        assert!(!second.is_active());
        assert!(second.call(()).is_some());
        assert_eq!(calls.get(), 2);
        assert_eq!((first.dropped(), second.dropped()), (1, 0));

        advance(WINDOW).await;
        assert!(first.call(()).is_some());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_calls_do_not_extend_window() {
        let mut ping = throttle(|()| (), WINDOW).expect("valid window");

        assert!(ping.call(()).is_some());
        advance(WINDOW / 2).await;
        assert!(ping.call(()).is_none());
        assert_eq!(ping.remaining(), Some(WINDOW / 2));

        advance(WINDOW / 2).await;
        assert!(ping.call(()).is_some(), "window must close at its original deadline");
    }
}
