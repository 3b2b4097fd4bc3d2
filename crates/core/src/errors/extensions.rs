//! Extension traits for error handling

use super::types::{Error, Result};

/// Attaches a caller-side description to an error while keeping its variant.
pub trait ResultExt<T> {
    /// Prefix the error message with `message`
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().prefixed(message.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().prefixed(f()))
    }
}

impl Error {
    fn prefixed(mut self, context: String) -> Self {
        let slot = match &mut self {
            Error::InvalidInput { message, .. }
            | Error::OutOfRange { message, .. }
            | Error::Parse { message, .. }
            | Error::Encoding { message, .. }
            | Error::Json { message, .. }
            | Error::Configuration { message }
            | Error::Runtime { message } => message,
            Error::FileSystem { operation, .. } => operation,
        };
        *slot = format!("{context}: {slot}");
        self
    }
}
