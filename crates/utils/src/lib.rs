//! Small, independent utility functions for utilkit
//!
//! Each module is a self-contained group of helpers. Nothing here keeps
//! global state; the only runtime requirement is a tokio runtime for the
//! timers in [`rate_limit`].
//!
//! ## Key Components
//!
//! - [`text`]: string manipulation and base64
//! - [`numeric`]: number formatting, byte sizes and currency
//! - [`date`]: calendar arithmetic on `chrono` values
//! - [`network`]: URL parsing and query strings
//! - [`random`]: random numbers, strings and UUIDs
//! - [`collections`]: array, object and clone helpers
//! - [`rate_limit`]: debounce and throttle
//! - [`resilience`]: error and panic capture
//! - [`logging`]: tracing subscriber setup

pub mod collections;
pub mod date;
pub mod logging;
pub mod network;
pub mod numeric;
pub mod random;
pub mod rate_limit;
pub mod resilience;
pub mod text;

pub use numeric::{ByteUnit, CurrencyOptions};
pub use rate_limit::{debounce, throttle, Debounced, ThrottleOptions, Throttled};
pub use resilience::{try_catch_async, try_catch_sync, CaughtError, ErrorContext, Failure};
pub use text::{FormatArg, IsBase64Options, RemoveSpaceOptions};
