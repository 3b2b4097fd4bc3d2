//! String helpers.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utilkit_core::{Error, Result};

/// Returns `true` for `None` or a zero-length string.
///
/// Whitespace is content here: `is_empty(Some(" "))` is `false`.
#[must_use]
pub fn is_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

/// Returns `true` for `None` or a string made only of whitespace.
#[must_use]
pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character and leaves the rest untouched.
#[must_use]
pub fn uncapitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extracts text from `s` using `regex`.
///
/// With `return_original` the whole match is returned; otherwise capture
/// group 1 is returned, or the whole match when the pattern has no groups.
/// `None` means the pattern did not match (or group 1 did not participate).
///
/// ```
/// use regex::Regex;
/// use utilkit_utils::text::string::extract_string_by_regex;
///
/// let re = Regex::new(r"^(.*)_\d+$").unwrap();
/// assert_eq!(extract_string_by_regex("sample_rate_0", &re, false).as_deref(), Some("sample_rate"));
/// assert_eq!(extract_string_by_regex("sample_rate", &re, false), None);
/// ```
#[must_use]
pub fn extract_string_by_regex(s: &str, regex: &Regex, return_original: bool) -> Option<String> {
    let caps = regex.captures(s)?;
    let whole = caps.get(0)?;
    if return_original || regex.captures_len() < 2 {
        return Some(whole.as_str().to_string());
    }
    caps.get(1).map(|m| m.as_str().to_string())
}

#[must_use]
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

#[must_use]
pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}

#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Repeats `s` `n` times.
#[must_use]
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Base64-encodes the UTF-8 bytes of `s`.
#[must_use]
pub fn base64_encode(s: &str) -> String {
    super::base64::encode(s)
}

/// Decodes standard base64 into a UTF-8 string.
pub fn base64_decode(s: &str) -> Result<String> {
    super::base64::decode(s)
}

/// Which whitespace [`remove_space`] should strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveSpaceOptions {
    /// Leading whitespace
    pub start: bool,
    /// Trailing whitespace
    pub end: bool,
    /// Whitespace between the first and last non-whitespace characters
    pub middle: bool,
    /// Every whitespace character, wherever it is
    pub all: bool,
}

/// Removes whitespace from the regions selected by `options`.
///
/// ```
/// use utilkit_utils::text::string::{remove_space, RemoveSpaceOptions};
///
/// let opts = RemoveSpaceOptions { middle: true, ..Default::default() };
/// assert_eq!(remove_space("  hello world  ", opts), "  helloworld  ");
/// ```
#[must_use]
pub fn remove_space(s: &str, options: RemoveSpaceOptions) -> String {
    if options.all {
        return s.chars().filter(|c| !c.is_whitespace()).collect();
    }

    let body_start = match s.find(|c: char| !c.is_whitespace()) {
        Some(idx) => idx,
        // Nothing but whitespace: there is no middle, only ends.
        None if options.start || options.end => return String::new(),
        None => return s.to_string(),
    };
    let body_end = s
        .rfind(|c: char| !c.is_whitespace())
        .map(|idx| idx + s[idx..].chars().next().map_or(0, char::len_utf8))
        .unwrap_or(s.len());

    let mut out = String::with_capacity(s.len());
    if !options.start {
        out.push_str(&s[..body_start]);
    }
    let body = &s[body_start..body_end];
    if options.middle {
        out.extend(body.chars().filter(|c| !c.is_whitespace()));
    } else {
        out.push_str(body);
    }
    if !options.end {
        out.push_str(&s[body_end..]);
    }
    out
}

/// Removes interior whitespace, and the outer whitespace too when
/// `remove_ends` is set.
#[must_use]
pub fn remove_middle_spaces(s: &str, remove_ends: bool) -> String {
    remove_space(
        s,
        RemoveSpaceOptions {
            start: remove_ends,
            end: remove_ends,
            middle: true,
            all: false,
        },
    )
}

/// `true` when `s` is one or more ASCII digits.
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a digit-only string. Anything else yields `None`.
#[must_use]
pub fn string_to_number(s: &str) -> Option<f64> {
    if !is_numeric(s) {
        return None;
    }
    s.parse().ok()
}

/// Parses a digit-only string into an unsigned 128-bit integer.
pub fn string_to_big_int(s: &str) -> Result<u128> {
    if !is_numeric(s) {
        return Err(Error::invalid_input(
            "string_to_big_int",
            "Invalid input: string must represent a non-negative integer.",
        ));
    }
    s.parse::<u128>()
        .map_err(|_| Error::out_of_range("string_to_big_int", s, "value does not fit in 128 bits"))
}

/// `true` when `s` reads the same forwards and backwards, compared per char.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

fn char_counts(s: &str) -> IndexMap<char, usize> {
    let mut counts = IndexMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Every character that shares the highest occurrence count, in the order
/// each first appears.
#[must_use]
pub fn most_frequent_characters(s: &str) -> Vec<char> {
    let counts = char_counts(s);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(c, _)| c)
        .collect()
}

/// Characters that occur exactly once, in order of appearance.
#[must_use]
pub fn unique_characters(s: &str) -> Vec<char> {
    char_counts(s)
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .map(|(c, _)| c)
        .collect()
}

/// A value substituted into a [`format`] template.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
}

impl FormatArg {
    fn as_string(&self) -> String {
        match self {
            FormatArg::Str(s) => s.clone(),
            FormatArg::Int(n) => n.to_string(),
            FormatArg::Float(n) => n.to_string(),
            FormatArg::Bool(b) => b.to_string(),
            FormatArg::Json(v) => v.to_string(),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            FormatArg::Str(s) => s.trim().parse().unwrap_or(f64::NAN),
            FormatArg::Int(n) => *n as f64,
            FormatArg::Float(n) => *n,
            FormatArg::Bool(b) => f64::from(u8::from(*b)),
            FormatArg::Json(v) => v.as_f64().unwrap_or(f64::NAN),
        }
    }

    fn as_integer(&self) -> String {
        match self {
            FormatArg::Int(n) => n.to_string(),
            other => {
                let n = other.as_f64();
                if n.is_finite() {
                    (n.trunc() as i64).to_string()
                } else {
                    "NaN".to_string()
                }
            }
        }
    }

    fn as_json(&self) -> String {
        match self {
            FormatArg::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            FormatArg::Int(n) => n.to_string(),
            FormatArg::Float(n) => serde_json::Number::from_f64(*n)
                .map_or_else(|| "null".to_string(), |n| n.to_string()),
            FormatArg::Bool(b) => b.to_string(),
            FormatArg::Json(v) => v.to_string(),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl From<serde_json::Value> for FormatArg {
    fn from(value: serde_json::Value) -> Self {
        FormatArg::Json(value)
    }
}

/// printf-style formatting.
///
/// Supports `%s`, `%d`/`%i` (truncated integer), `%f` (six decimals), `%j`
/// (JSON) and `%%`. Placeholders without a matching argument are kept as-is
/// and leftover arguments are appended, space separated.
///
/// ```
/// use utilkit_utils::text::string::format;
///
/// assert_eq!(format("%d + %d = %d", &[2.into(), 3.into(), 5.into()]), "2 + 3 = 5");
/// assert_eq!(format("Price: %f", &[9.99.into()]), "Price: 9.990000");
/// ```
#[must_use]
pub fn format(template: &str, args: &[FormatArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&conversion) = chars.peek() else {
            out.push('%');
            break;
        };
        if conversion == '%' {
            chars.next();
            out.push('%');
            continue;
        }
        if !matches!(conversion, 's' | 'd' | 'i' | 'f' | 'j') {
            out.push('%');
            continue;
        }
        chars.next();
        match remaining.next() {
            Some(arg) => match conversion {
                's' => out.push_str(&arg.as_string()),
                'd' | 'i' => out.push_str(&arg.as_integer()),
                'f' => out.push_str(&format!("{:.6}", arg.as_f64())),
                _ => out.push_str(&arg.as_json()),
            },
            None => {
                out.push('%');
                out.push(conversion);
            }
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&arg.as_string());
    }
    out
}
