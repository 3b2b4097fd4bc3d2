//! Configuration for the utilkit command line
//!
//! Settings are resolved once at startup and then shared read-only.
//!
//! ## Key Components
//!
//! - **`config`**: the immutable [`Config`] and its sections.
//! - **`loader`**: [`ConfigLoader`], which layers defaults, an optional JSON
//!   file and `UTILKIT_*` environment variables.

pub mod config;
pub mod loader;

pub use config::{ByteDefaults, Config, CurrencyDefaults};
pub use loader::ConfigLoader;
