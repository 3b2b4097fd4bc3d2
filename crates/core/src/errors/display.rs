//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { operation, message } => {
                write!(f, "invalid input for {operation}: {message}")
            }
            Error::OutOfRange {
                operation,
                value,
                message,
            } => {
                write!(f, "value '{value}' out of range for {operation}: {message}")
            }
            Error::Parse { input, message, .. } => {
                write!(f, "failed to parse '{input}': {message}")
            }
            Error::Encoding { message, .. } => {
                write!(f, "encoding error: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Runtime { message } => {
                write!(f, "runtime error: {message}")
            }
        }
    }
}
