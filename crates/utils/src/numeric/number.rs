//! Number formatting and arithmetic helpers.

use rand::Rng;
use utilkit_core::{Error, Result};

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest input whose factorial is finite in `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Extra digits requested from the float formatter so that the digit after
/// the cut-off is exact.
const GUARD_DIGITS: usize = 30;

/// Most fractional digits [`format_decimal`] will produce; larger requests
/// are clamped.
pub const MAX_DECIMAL_PLACES: usize = 100;

fn non_finite(num: f64) -> Option<String> {
    if num.is_nan() {
        Some("NaN".to_string())
    } else if num.is_infinite() {
        Some(if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Formats `num` with exactly `decimal_places` fractional digits.
///
/// Rounding is half-up on the exact decimal value of the float, so
/// `format_decimal(0.125, 2)` is `"0.13"` and `format_decimal(1.005, 2)` is
/// `"1.00"` (1.005 is stored as 1.00499…). At most [`MAX_DECIMAL_PLACES`]
/// digits are written.
#[must_use]
pub fn format_decimal(num: f64, decimal_places: usize) -> String {
    if let Some(s) = non_finite(num) {
        return s;
    }
    let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);

    let exact = format!("{:.*}", decimal_places + GUARD_DIGITS, num.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let rounded = round_half_up(int_part, frac_part, decimal_places);
    if num < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// Rounds an unsigned decimal given as integer and fraction digit strings to
/// `places` fractional digits, halves away from zero.
pub(crate) fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> String {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 1);
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Inserts `,` between every group of three integer digits.
///
/// ```
/// use utilkit_utils::numeric::number::format_with_commas;
///
/// assert_eq!(format_with_commas(1234567.89), "1,234,567.89");
/// assert_eq!(format_with_commas(1000000.0), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(num: f64) -> String {
    if let Some(s) = non_finite(num) {
        return s;
    }
    let plain = num.to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    out.push_str(&group_digits(int_part, ','));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Groups a run of ASCII digits in threes from the right.
pub(crate) fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Rounds to `precision` decimal places; exact halves round toward +∞.
#[must_use]
pub fn round(num: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    let scaled = num * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / factor
}

/// Inclusive range check.
#[must_use]
pub fn is_in_range<T: PartialOrd>(num: T, min: T, max: T) -> bool {
    num >= min && num <= max
}

/// Uniformly random integer in `min..=max`.
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(Error::out_of_range(
            "random_int",
            format!("{min}..={max}"),
            "minimum must not exceed maximum",
        ));
    }
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// `num!` for a non-negative integral `num`.
///
/// Inputs above 170 overflow `f64` and yield infinity.
pub fn factorial(num: f64) -> Result<f64> {
    if !num.is_finite() || num < 0.0 || num.fract() != 0.0 {
        return Err(Error::invalid_input(
            "factorial",
            "Input must be a non-negative integer",
        ));
    }
    if num > MAX_FINITE_FACTORIAL {
        return Ok(f64::INFINITY);
    }
    let n = num as u32;
    Ok((2..=n).fold(1.0, |acc, k| acc * f64::from(k)))
}

/// `num` as a percentage string with `decimal_places` digits.
#[must_use]
pub fn to_percentage(num: f64, decimal_places: usize) -> String {
    format!("{}%", format_decimal(num * 100.0, decimal_places))
}

/// Renders `num` in base `radix` (2..=36) with lowercase digits.
pub fn to_radix_string(num: i64, radix: u32) -> Result<String> {
    if !(2..=36).contains(&radix) {
        return Err(Error::out_of_range(
            "to_radix_string",
            radix,
            "radix must be between 2 and 36",
        ));
    }
    let mut value = num.unsigned_abs();
    if value == 0 {
        return Ok("0".to_string());
    }
    let radix = u64::from(radix);
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(RADIX_DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    if num < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    Ok(String::from_utf8_lossy(&digits).into_owned())
}

/// Greatest common divisor of `|a|` and `|b|`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}
