//! Immutable configuration shared by every command.

use serde::{Deserialize, Serialize};
use utilkit_core::{
    Error, Result, DEFAULT_BYTE_BASE, DEFAULT_BYTE_DECIMALS, DEFAULT_CURRENCY,
    DEFAULT_FRACTION_DIGITS, DEFAULT_LOCALE, DEFAULT_LOG_FILTER, MAX_FRACTION_DIGITS,
};
use utilkit_utils::CurrencyOptions;

/// Largest number of decimals accepted for byte sizes.
const MAX_BYTE_DECIMALS: i32 = 20;

/// Top-level configuration.
///
/// Every field has a default, so an empty JSON object is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub currency: CurrencyDefaults,
    pub bytes: ByteDefaults,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: LogFilter,
}

/// Defaults for the `currency` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyDefaults {
    pub locale: String,
    pub currency: String,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
}

impl Default for CurrencyDefaults {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            minimum_fraction_digits: DEFAULT_FRACTION_DIGITS,
            maximum_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

/// Defaults for the `bytes` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ByteDefaults {
    /// 1024 for binary units, 1000 for SI
    pub base: f64,
    pub decimals: i32,
}

impl Default for ByteDefaults {
    fn default() -> Self {
        Self {
            base: DEFAULT_BYTE_BASE,
            decimals: DEFAULT_BYTE_DECIMALS,
        }
    }
}

/// A `tracing` filter directive string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogFilter(pub String);

impl Default for LogFilter {
    fn default() -> Self {
        Self(DEFAULT_LOG_FILTER.to_string())
    }
}

impl LogFilter {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Config {
    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let currency = &self.currency;
        if currency.currency.len() != 3 || !currency.currency.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(Error::configuration(format!(
                "currency.currency must be a three-letter ISO 4217 code, got '{}'",
                currency.currency
            )));
        }
        if currency.locale.trim().is_empty() {
            return Err(Error::configuration("currency.locale must not be empty"));
        }
        for (name, digits) in [
            ("minimum_fraction_digits", currency.minimum_fraction_digits),
            ("maximum_fraction_digits", currency.maximum_fraction_digits),
        ] {
            if digits > MAX_FRACTION_DIGITS {
                return Err(Error::configuration(format!(
                    "currency.{name} must be at most {MAX_FRACTION_DIGITS}, got {digits}"
                )));
            }
        }

        if !self.bytes.base.is_finite() || self.bytes.base <= 1.0 {
            return Err(Error::configuration(format!(
                "bytes.base must be a finite number greater than 1, got {}",
                self.bytes.base
            )));
        }
        if !(0..=MAX_BYTE_DECIMALS).contains(&self.bytes.decimals) {
            return Err(Error::configuration(format!(
                "bytes.decimals must be between 0 and {MAX_BYTE_DECIMALS}, got {}",
                self.bytes.decimals
            )));
        }
        Ok(())
    }

    /// Currency formatting options carrying the configured defaults.
    #[must_use]
    pub fn currency_options(&self) -> CurrencyOptions {
        CurrencyOptions {
            locale: Some(self.currency.locale.clone()),
            currency: Some(self.currency.currency.clone()),
            minimum_fraction_digits: Some(self.currency.minimum_fraction_digits),
            maximum_fraction_digits: Some(self.currency.maximum_fraction_digits),
        }
    }
}
