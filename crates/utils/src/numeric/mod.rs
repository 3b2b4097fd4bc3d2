//! Numeric formatting and arithmetic
//!
//! ## Key Components
//!
//! - [`number`]: decimal formatting, rounding, ranges and integer helpers
//! - [`bytes`]: byte unit conversion and human-readable sizes
//! - [`currency`]: locale-aware currency strings

pub mod bytes;
pub mod currency;
pub mod number;

pub use bytes::ByteUnit;
pub use currency::CurrencyOptions;
