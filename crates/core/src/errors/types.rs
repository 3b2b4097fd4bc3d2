//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for utilkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for utilkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that a utility cannot accept at all
    InvalidInput { operation: String, message: String },

    /// Numeric or positional argument outside the accepted range
    OutOfRange {
        operation: String,
        value: String,
        message: String,
    },

    /// Textual input that failed to parse (URLs, numbers, units)
    Parse {
        input: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Base64 or UTF-8 decoding errors
    Encoding {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    Configuration { message: String },

    /// Async runtime errors
    Runtime { message: String },
}
