//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an out-of-range error
    #[must_use]
    pub fn out_of_range(
        operation: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        Error::OutOfRange {
            operation: operation.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Create a parse error
    #[must_use]
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error with a source error
    #[must_use]
    pub fn parse_with_source(
        input: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Parse {
            input: input.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a runtime error
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime {
            message: message.into(),
        }
    }
}
