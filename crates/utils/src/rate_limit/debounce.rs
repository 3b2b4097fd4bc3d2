//! Trailing and leading-edge debouncing.

use super::current_handle;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use utilkit_core::Result;

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

struct DebounceState {
    /// Bumped whenever the pending timer is replaced or cancelled
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

struct Inner<A> {
    func: Callback<A>,
    delay: Duration,
    immediate: bool,
    handle: Handle,
    state: Mutex<DebounceState>,
}

/// A debounced callback. Cloning shares the same timer.
pub struct Debounced<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Wraps `func` so that a burst of calls results in a single invocation.
///
/// In trailing mode (`immediate == false`) `func` runs with the arguments of
/// the last call once `delay` has passed without another call. In immediate
/// mode it runs with the first call of a burst, and later calls only extend
/// the quiet period.
///
/// Fails when no tokio runtime is running.
pub fn debounce<A, F>(func: F, delay: Duration, immediate: bool) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let handle = current_handle("debounce")?;
    Ok(Debounced {
        inner: Arc::new(Inner {
            func: Box::new(func),
            delay,
            immediate,
            handle,
            state: Mutex::new(DebounceState {
                generation: 0,
                timer: None,
            }),
        }),
    })
}

impl<A: Send + 'static> Debounced<A> {
    /// Records a call, restarting the quiet period.
    pub fn call(&self, args: A) {
        let mut state = self.inner.state.lock();
        let call_now = self.inner.immediate && state.timer.is_none();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.generation += 1;
        let generation = state.generation;

        let (leading_args, trailing_args) = if self.inner.immediate {
            (call_now.then_some(args), None)
        } else {
            (None, Some(args))
        };
        let inner = Arc::clone(&self.inner);
        state.timer = Some(self.inner.handle.spawn(async move {
            tokio::time::sleep(inner.delay).await;
            {
                let mut state = inner.state.lock();
                if state.generation != generation {
                    return;
                }
                state.timer = None;
            }
            if let Some(args) = trailing_args {
                tracing::trace!("debounce timer fired");
                (inner.func)(args);
            }
        }));
        drop(state);

        if let Some(args) = leading_args {
            (self.inner.func)(args);
        }
    }
}

impl<A> Debounced<A> {
    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.generation += 1;
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
    }

    /// Whether a timer is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_some()
    }
}
