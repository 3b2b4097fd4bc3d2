//! Core error types and constants for `utilkit`.
//!
//! Every utility crate in the workspace reports failure through the single
//! [`Error`] enum defined here, so callers can match on one type no matter
//! which helper they used.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum, the `Result` alias and the
//!   `ResultExt` trait for attaching context.
//! - **`constants`**: shared environment variable names and defaults.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
};
