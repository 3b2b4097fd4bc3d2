//! Window-based throttling with leading and trailing edges.

use super::current_handle;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use utilkit_core::Result;

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// Which edges of a window may invoke the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleOptions {
    /// Invoke on the call that opens a window
    pub leading: bool,
    /// Invoke with the latest suppressed arguments when a window closes
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

struct ThrottleState<A> {
    generation: u64,
    /// Running while a window is open
    window: Option<JoinHandle<()>>,
    pending: Option<A>,
}

struct Inner<A> {
    func: Callback<A>,
    limit: Duration,
    options: ThrottleOptions,
    handle: Handle,
    state: Mutex<ThrottleState<A>>,
}

/// A throttled callback. Cloning shares the same window.
pub struct Throttled<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Wraps `func` so that it runs at most once per `limit`.
///
/// The first call opens a window and, with `leading`, invokes immediately.
/// Calls inside the window are suppressed; with `trailing`, the latest of
/// them is invoked when the window closes, and that invocation opens the
/// next window.
///
/// Fails when no tokio runtime is running.
pub fn throttle<A, F>(func: F, limit: Duration, options: ThrottleOptions) -> Result<Throttled<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let handle = current_handle("throttle")?;
    Ok(Throttled {
        inner: Arc::new(Inner {
            func: Box::new(func),
            limit,
            options,
            handle,
            state: Mutex::new(ThrottleState {
                generation: 0,
                window: None,
                pending: None,
            }),
        }),
    })
}

impl<A: Send + 'static> Inner<A> {
    async fn run_windows(self: Arc<Self>, generation: u64) {
        loop {
            tokio::time::sleep(self.limit).await;
            let args = {
                let mut state = self.state.lock();
                if state.generation != generation {
                    return;
                }
                match state.pending.take() {
                    Some(args) => args,
                    None => {
                        state.window = None;
                        return;
                    }
                }
            };
            tracing::trace!("throttle trailing edge");
            (self.func)(args);
        }
    }
}

impl<A: Send + 'static> Throttled<A> {
    /// Records a call, invoking now or deferring as the window allows.
    pub fn call(&self, args: A) {
        let mut state = self.inner.state.lock();
        if state.window.is_some() {
            if self.inner.options.trailing {
                state.pending = Some(args);
            }
            return;
        }

        let generation = state.generation;
        let window = Arc::clone(&self.inner).run_windows(generation);
        state.window = Some(self.inner.handle.spawn(window));

        if !self.inner.options.leading {
            if self.inner.options.trailing {
                state.pending = Some(args);
            }
            return;
        }
        drop(state);
        (self.inner.func)(args);
    }
}

impl<A> Throttled<A> {
    /// Drops suppressed arguments and closes the current window.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.generation += 1;
        state.pending = None;
        if let Some(window) = state.window.take() {
            window.abort();
        }
    }

    /// Whether a trailing invocation is waiting for the window to close.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }
}
