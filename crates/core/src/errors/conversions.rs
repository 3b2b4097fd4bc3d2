//! Conversion implementations for error types

use super::types::Error;
use std::path::PathBuf;

// Conversion implementations (keeping these as they provide more context than thiserror's #[from])
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Error::Encoding {
            message: format!("invalid base64 input: {error}"),
            source: Some(Box::new(error)),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Error::Encoding {
            message: format!("decoded bytes are not valid UTF-8: {error}"),
            source: Some(Box::new(error)),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::Parse {
            input: String::new(),
            message: format!("invalid URL: {error}"),
            source: Some(Box::new(error)),
        }
    }
}
