//! Error capture for fallible and panicking operations.
//!
//! ## Key Components
//!
//! - **`try_catch`**: runs a closure or future and turns both `Err` values
//!   and panics into a [`CaughtError`] enriched with caller context.

pub mod try_catch;

pub use try_catch::{try_catch_async, try_catch_sync, CaughtError, ErrorContext, Failure};
