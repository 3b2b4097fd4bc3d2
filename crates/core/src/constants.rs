/// Constants used throughout the utilkit codebase
// Environment variable names
pub const UTILKIT_CONFIG_VAR: &str = "UTILKIT_CONFIG";
pub const UTILKIT_LOCALE_VAR: &str = "UTILKIT_LOCALE";
pub const UTILKIT_CURRENCY_VAR: &str = "UTILKIT_CURRENCY";
pub const UTILKIT_BYTE_BASE_VAR: &str = "UTILKIT_BYTE_BASE";
pub const UTILKIT_BYTE_DECIMALS_VAR: &str = "UTILKIT_BYTE_DECIMALS";
pub const UTILKIT_LOG_VAR: &str = "UTILKIT_LOG";

// Byte conversion
pub const DEFAULT_BYTE_BASE: f64 = 1024.0;
pub const DEFAULT_BYTE_DECIMALS: i32 = 2;

// Currency formatting
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_FRACTION_DIGITS: u8 = 2;
pub const MAX_FRACTION_DIGITS: u8 = 20;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
