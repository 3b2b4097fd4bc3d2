//! Call-rate limiting for callbacks.
//!
//! Both wrappers schedule their timers on the tokio runtime that is current
//! when they are created, so they must be constructed from within a runtime.
//! Timers use `tokio::time`, which makes them controllable with a paused
//! clock in tests.
//!
//! ## Key Components
//!
//! - **`debounce`**: collapses a burst of calls into one, either at the start
//!   of the burst or after it has gone quiet.
//! - **`throttle`**: allows at most one invocation per window, with optional
//!   leading and trailing edges.

pub mod debounce;
pub mod throttle;

pub use debounce::{debounce, Debounced};
pub use throttle::{throttle, ThrottleOptions, Throttled};

use tokio::runtime::Handle;
use utilkit_core::{Error, Result};

fn current_handle(operation: &str) -> Result<Handle> {
    Handle::try_current().map_err(|e| {
        Error::runtime(format!(
            "{operation} must be created inside a tokio runtime: {e}"
        ))
    })
}
