//! Random numbers, strings and UUIDs
//!
//! ## Key Components
//!
//! - **Numbers**: fixed-length integers and values drawn from a range.
//! - **Strings**: alphanumeric strings of a given length.
//! - **`uuid`**: RFC 4122 identifiers, versions 1 through 6.

pub mod uuid;

use crate::numeric::number::format_decimal;
use rand::Rng;
use serde::{Deserialize, Serialize};
use utilkit_core::{Error, Result};

const ALPHANUMERIC: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Longest digit count that stays exact in an `f64` mantissa.
pub const MAX_RANDOM_NUMBER_LENGTH: u32 = 15;

/// Options for [`generate_random_number_between`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomNumberOptions {
    /// Draw a whole number instead of a fraction
    pub integer: bool,
    /// Round the drawn value to this many decimals
    pub decimal_places: Option<usize>,
}

/// A random integer with exactly `length` decimal digits.
pub fn generate_random_number(length: u32) -> Result<u64> {
    if !(1..=MAX_RANDOM_NUMBER_LENGTH).contains(&length) {
        return Err(Error::out_of_range(
            "generate_random_number",
            length,
            format!("length must be between 1 and {MAX_RANDOM_NUMBER_LENGTH}"),
        ));
    }
    let min = 10u64.pow(length - 1);
    let max = 10u64.pow(length) - 1;
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// A random value in `min..=max`.
///
/// With `integer` set the value is a whole number between `ceil(min)` and
/// `floor(max)`. `decimal_places` rounds half-up.
pub fn generate_random_number_between(
    min: f64,
    max: f64,
    options: &RandomNumberOptions,
) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::invalid_input(
            "generate_random_number_between",
            "bounds must be finite",
        ));
    }
    if min > max {
        return Err(Error::out_of_range(
            "generate_random_number_between",
            format!("{min}..={max}"),
            "minimum must not exceed maximum",
        ));
    }

    let mut rng = rand::thread_rng();
    let value = if options.integer {
        let (low, high) = (min.ceil(), max.floor());
        if low > high {
            return Err(Error::out_of_range(
                "generate_random_number_between",
                format!("{min}..={max}"),
                "range contains no integer",
            ));
        }
        rng.gen_range(low as i64..=high as i64) as f64
    } else if (max - min).is_finite() {
        rng.gen_range(min..=max)
    } else {
        // Span overflows f64; interpolate between the bounds instead.
        let t: f64 = rng.gen();
        (min * (1.0 - t) + max * t).clamp(min, max)
    };

    match options.decimal_places {
        Some(places) => {
            let rounded = format_decimal(value, places);
            rounded.parse::<f64>().map_err(|e| {
                Error::parse_with_source(rounded.clone(), "rounded value is not a number", e)
            })
        }
        None => Ok(value),
    }
}

/// A random string over `[A-Za-z0-9]`.
pub fn generate_random_string(length: usize) -> Result<String> {
    if length == 0 {
        return Err(Error::out_of_range(
            "generate_random_string",
            length,
            "length must be greater than 0",
        ));
    }
    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| char::from(ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())]))
        .collect())
}
