use std::fmt;

use tracing::trace;

/// Retained state: `Pending` → `Invoked` is one-way.
enum OnceState<F, R> {
    /// Not yet invoked successfully; still owns the function.
    Pending(F),
    /// Invoked; the function has been dropped and only the result remains.
    Invoked(R),
}

/// Wrapper that runs its function at most once and replays the result.
///
/// Built with [`once`] (infallible functions, [`Once::call`]) or [`try_once`]
/// (functions returning `Result`, [`Once::try_call`]).
pub struct Once<F, R> {
    state: OnceState<F, R>,
}

/// Wrap `func` so that only the first call runs it.
///
/// Every later call returns a clone of the first result, whatever its
/// arguments.
pub fn once<F, A, R>(func: F) -> Once<F, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    Once {
        state: OnceState::Pending(func),
    }
}

/// Like [`once`] for fallible functions: an `Err` is handed back unchanged
/// and the wrapper stays pending, so the next call tries again.
pub fn try_once<F, A, R, E>(func: F) -> Once<F, R>
where
    F: FnMut(A) -> Result<R, E>,
    R: Clone,
{
    Once {
        state: OnceState::Pending(func),
    }
}

impl<F, R: Clone> Once<F, R> {
    /// Run the function on the first call; afterwards return the cached result.
    pub fn call<A>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let result = match &mut self.state {
            OnceState::Invoked(result) => return result.clone(),
            OnceState::Pending(func) => func(args),
        };
        trace!("once: first invocation, caching result");
        self.state = OnceState::Invoked(result.clone());
        result
    }

    /// Fallible variant of [`call`](Self::call). Failures are not cached.
    pub fn try_call<A, E>(&mut self, args: A) -> Result<R, E>
    where
        F: FnMut(A) -> Result<R, E>,
    {
        let result = match &mut self.state {
            OnceState::Invoked(result) => return Ok(result.clone()),
            OnceState::Pending(func) => func(args),
        };
        match result {
            Ok(value) => {
                trace!("once: first successful invocation, caching result");
                self.state = OnceState::Invoked(value.clone());
                Ok(value)
            }
            Err(err) => {
                trace!("once: invocation failed, staying pending");
                Err(err)
            }
        }
    }

    /// True once a call has completed successfully.
    pub fn is_invoked(&self) -> bool {
        matches!(self.state, OnceState::Invoked(_))
    }

    /// The cached result, if the function has run.
    pub fn get(&self) -> Option<&R> {
        match &self.state {
            OnceState::Invoked(result) => Some(result),
            OnceState::Pending(_) => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            OnceState::Pending(_) => f.debug_struct("Once").field("state", &"pending").finish(),
            OnceState::Invoked(result) => f.debug_struct("Once").field("result", result).finish(),
        }
    }
}
