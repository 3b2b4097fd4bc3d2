//! Conversion between byte units and human-readable byte sizes.

use super::number::format_decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utilkit_core::{Error, Result, DEFAULT_BYTE_BASE, DEFAULT_BYTE_DECIMALS};

/// Units from bit to yottabyte.
///
/// The discriminant order matters: every unit after [`ByteUnit::Byte`] is
/// one power of the conversion base larger than the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ByteUnit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
    Zettabyte,
    Yottabyte,
}

impl ByteUnit {
    pub const ALL: [ByteUnit; 10] = [
        ByteUnit::Bit,
        ByteUnit::Byte,
        ByteUnit::Kilobyte,
        ByteUnit::Megabyte,
        ByteUnit::Gigabyte,
        ByteUnit::Terabyte,
        ByteUnit::Petabyte,
        ByteUnit::Exabyte,
        ByteUnit::Zettabyte,
        ByteUnit::Yottabyte,
    ];

    /// Short symbol such as `"KB"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            ByteUnit::Bit => "bit",
            ByteUnit::Byte => "B",
            ByteUnit::Kilobyte => "KB",
            ByteUnit::Megabyte => "MB",
            ByteUnit::Gigabyte => "GB",
            ByteUnit::Terabyte => "TB",
            ByteUnit::Petabyte => "PB",
            ByteUnit::Exabyte => "EB",
            ByteUnit::Zettabyte => "ZB",
            ByteUnit::Yottabyte => "YB",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// How many bytes one of this unit holds for the given base.
    #[must_use]
    pub fn multiplier(self, base: f64) -> f64 {
        match self {
            ByteUnit::Bit => 1.0 / 8.0,
            unit => base.powi(unit.index() as i32 - 1),
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ByteUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ByteUnit::ALL
            .into_iter()
            .find(|unit| {
                unit.symbol().eq_ignore_ascii_case(wanted)
                    || format!("{unit:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                Error::parse(
                    s,
                    "unknown byte unit, expected one of bit, B, KB, MB, GB, TB, PB, EB, ZB, YB",
                )
            })
    }
}

/// Converts `value` between units using base 1024.
///
/// ```
/// use utilkit_utils::numeric::bytes::{convert, ByteUnit};
///
/// assert_eq!(convert(1.0, ByteUnit::Gigabyte, ByteUnit::Megabyte), 1024.0);
/// ```
#[must_use]
pub fn convert(value: f64, from: ByteUnit, to: ByteUnit) -> f64 {
    convert_with_base(value, from, to, DEFAULT_BYTE_BASE)
}

/// Converts `value` between units using an explicit base (usually 1000 or 1024).
#[must_use]
pub fn convert_with_base(value: f64, from: ByteUnit, to: ByteUnit, base: f64) -> f64 {
    value * from.multiplier(base) / to.multiplier(base)
}

/// Formats a byte count with two decimals in base 1024.
#[must_use]
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with(bytes, DEFAULT_BYTE_DECIMALS, DEFAULT_BYTE_BASE)
}

/// Formats a byte count using the largest unit that keeps the magnitude at
/// least one.
///
/// Magnitudes below one byte are expressed in bits. Negative `decimals`
/// are treated as zero.
#[must_use]
pub fn format_bytes_with(bytes: f64, decimals: i32, base: f64) -> String {
    if bytes == 0.0 {
        return "0 B".to_string();
    }
    let places = usize::try_from(decimals).unwrap_or(0);
    let magnitude = bytes.abs();

    if magnitude < 1.0 {
        let bits = bytes * 8.0;
        let plural = if bits.abs() == 1.0 { "" } else { "s" };
        return format!("{} {}{plural}", format_decimal(bits, places), ByteUnit::Bit);
    }

    // Power of `base` below the magnitude, capped at the largest unit.
    let max_power = ByteUnit::Yottabyte.index() - 1;
    let mut power = 0;
    while power < max_power && magnitude >= base.powi(power as i32 + 1) {
        power += 1;
    }

    let value = bytes / base.powi(power as i32);
    format!(
        "{} {}",
        format_decimal(value, places),
        ByteUnit::ALL[power + 1]
    )
}
