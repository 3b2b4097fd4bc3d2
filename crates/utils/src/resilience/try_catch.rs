//! Capture errors and panics together with extra context.
//!
//! ```
//! use serde_json::json;
//! use utilkit_utils::resilience::{try_catch_sync, Failure};
//!
//! let context = json!({"request_id": 42}).as_object().cloned();
//! let caught = try_catch_sync(|| "x".parse::<i32>(), context).unwrap_err();
//! assert!(matches!(caught.failure, Failure::Error(_)));
//! assert_eq!(caught.context["request_id"], 42);
//! ```

use futures::FutureExt;
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Extra key/value data attached to a caught failure.
pub type ErrorContext = Map<String, Value>;

/// What went wrong.
#[derive(Debug)]
pub enum Failure<E> {
    /// The operation returned `Err`
    Error(E),
    /// The operation panicked with this message
    Panic(String),
}

/// A failure plus the context supplied by the caller.
#[derive(Debug)]
pub struct CaughtError<E> {
    pub failure: Failure<E>,
    pub context: ErrorContext,
}

impl<E> CaughtError<E> {
    fn new(failure: Failure<E>, context: Option<ErrorContext>) -> Self {
        let context = context.unwrap_or_default();
        match &failure {
            Failure::Error(_) => tracing::debug!(keys = context.len(), "caught error"),
            Failure::Panic(message) => {
                tracing::warn!(panic = %message, keys = context.len(), "caught panic");
            }
        }
        Self { failure, context }
    }

    /// The error value, unless the operation panicked.
    pub fn into_error(self) -> Option<E> {
        match self.failure {
            Failure::Error(e) => Some(e),
            Failure::Panic(_) => None,
        }
    }

    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self.failure, Failure::Panic(_))
    }
}

impl<E: fmt::Display> fmt::Display for CaughtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            Failure::Error(e) => write!(f, "{e}")?,
            Failure::Panic(message) => write!(f, "panicked: {message}")?,
        }
        if !self.context.is_empty() {
            write!(f, " {}", Value::Object(self.context.clone()))?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for CaughtError<E> {}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Runs `operation`, converting an `Err` or a panic into a [`CaughtError`].
pub fn try_catch_sync<T, E, F>(
    operation: F,
    context: Option<ErrorContext>,
) -> Result<T, CaughtError<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(CaughtError::new(Failure::Error(e), context)),
        Err(payload) => Err(CaughtError::new(
            Failure::Panic(panic_message(payload)),
            context,
        )),
    }
}

/// Awaits `future`, converting an `Err` or a panic into a [`CaughtError`].
pub async fn try_catch_async<T, E, Fut>(
    future: Fut,
    context: Option<ErrorContext>,
) -> Result<T, CaughtError<E>>
where
    Fut: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(CaughtError::new(Failure::Error(e), context)),
        Err(payload) => Err(CaughtError::new(
            Failure::Panic(panic_message(payload)),
            context,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use utilkit_core::Error;

    fn context() -> Option<ErrorContext> {
        json!({"code": 500, "source": "db"}).as_object().cloned()
    }

    #[test]
    fn test_sync_success() {
        let result: Result<i32, CaughtError<Error>> = try_catch_sync(|| Ok(7), context());
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_sync_error_carries_context() {
        let caught = try_catch_sync(
            || Err::<(), _>(Error::runtime("connection reset")),
            context(),
        )
        .unwrap_err();
        assert!(!caught.is_panic());
        assert_eq!(caught.context["code"], 500);
        assert_eq!(
            caught.to_string(),
            r#"runtime error: connection reset {"code":500,"source":"db"}"#
        );
        assert!(matches!(caught.into_error(), Some(Error::Runtime { .. })));
    }

    #[test]
    fn test_sync_panic_is_caught() {
        let caught = try_catch_sync(|| -> Result<(), Error> { panic!("boom") }, None).unwrap_err();
        assert!(caught.is_panic());
        assert!(caught.context.is_empty());
        assert_eq!(caught.to_string(), "panicked: boom");
    }

    #[test]
    fn test_panic_with_formatted_message() {
        let id = 3;
        let caught =
            try_catch_sync(|| -> Result<(), Error> { panic!("worker {id} died") }, None).unwrap_err();
        match caught.failure {
            Failure::Panic(message) => assert_eq!(message, "worker 3 died"),
            Failure::Error(_) => panic!("expected a panic"),
        }
    }

    #[tokio::test]
    async fn test_async_success_and_error() {
        let ok: Result<&str, CaughtError<Error>> =
            try_catch_async(async { Ok("done") }, None).await;
        assert_eq!(ok.unwrap(), "done");

        let caught = try_catch_async(
            async { Err::<(), _>(Error::configuration("missing key")) },
            context(),
        )
        .await
        .unwrap_err();
        assert_eq!(caught.context["source"], "db");
        assert!(matches!(caught.failure, Failure::Error(Error::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_async_panic_is_caught() {
        let caught = try_catch_async(
            async {
                tokio::task::yield_now().await;
                if true {
                    panic!("async boom");
                }
                Ok::<(), Error>(())
            },
            None,
        )
        .await
        .unwrap_err();
        assert!(caught.is_panic());
        assert_eq!(caught.to_string(), "panicked: async boom");
    }
}
