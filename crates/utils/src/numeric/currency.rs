//! Locale-aware currency formatting.
//!
//! A small built-in locale table covers the separators, symbol placement and
//! currency symbols of the locales this crate is used with. Unknown locales
//! fall back to `en-US`; unknown currencies are rendered with their ISO code.
//!
//! ```
//! use utilkit_utils::numeric::currency::{format, format_eur, CurrencyOptions};
//!
//! assert_eq!(format(1234.56, &CurrencyOptions::default()).unwrap(), "$1,234.56");
//! assert_eq!(format_eur(1234.56, &CurrencyOptions::default()).unwrap(), "1.234,56 €");
//! ```

use super::number::{group_digits, round_half_up};
use serde::{Deserialize, Serialize};
use utilkit_core::{
    Error, Result, DEFAULT_CURRENCY, DEFAULT_FRACTION_DIGITS, DEFAULT_LOCALE, MAX_FRACTION_DIGITS,
};

/// Formatting options. Unset fields take the defaults (`en-US`, `USD`, 2, 2).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// BCP 47 tag such as `en-US`, `zh-CN` or `de-DE`
    pub locale: Option<String>,
    /// ISO 4217 code such as `USD`, `CNY` or `EUR`
    pub currency: Option<String>,
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
}

impl CurrencyOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Fills every unset field from `defaults`.
    #[must_use]
    pub fn or(self, defaults: &CurrencyOptions) -> Self {
        Self {
            locale: self.locale.or_else(|| defaults.locale.clone()),
            currency: self.currency.or_else(|| defaults.currency.clone()),
            minimum_fraction_digits: self
                .minimum_fraction_digits
                .or(defaults.minimum_fraction_digits),
            maximum_fraction_digits: self
                .maximum_fraction_digits
                .or(defaults.maximum_fraction_digits),
        }
    }
}

struct LocaleFormat {
    tag: &'static str,
    group: char,
    decimal: char,
    symbol_after: bool,
    symbols: &'static [(&'static str, &'static str)],
}

const LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        group: ',',
        decimal: '.',
        symbol_after: false,
        symbols: &[
            ("USD", "$"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "¥"),
            ("CNY", "CN¥"),
        ],
    },
    LocaleFormat {
        tag: "en-GB",
        group: ',',
        decimal: '.',
        symbol_after: false,
        symbols: &[
            ("GBP", "£"),
            ("USD", "US$"),
            ("EUR", "€"),
            ("JPY", "JP¥"),
            ("CNY", "CN¥"),
        ],
    },
    LocaleFormat {
        tag: "zh-CN",
        group: ',',
        decimal: '.',
        symbol_after: false,
        symbols: &[
            ("CNY", "¥"),
            ("USD", "US$"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "JP¥"),
        ],
    },
    LocaleFormat {
        tag: "ja-JP",
        group: ',',
        decimal: '.',
        symbol_after: false,
        symbols: &[
            ("JPY", "￥"),
            ("USD", "$"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("CNY", "元"),
        ],
    },
    LocaleFormat {
        tag: "de-DE",
        group: '.',
        decimal: ',',
        symbol_after: true,
        symbols: &[
            ("EUR", "€"),
            ("USD", "$"),
            ("GBP", "£"),
            ("JPY", "¥"),
            ("CNY", "CN¥"),
        ],
    },
    LocaleFormat {
        tag: "fr-FR",
        group: ' ',
        decimal: ',',
        symbol_after: true,
        symbols: &[("EUR", "€"), ("USD", "$US"), ("GBP", "£GB")],
    },
];

fn resolve_locale(tag: &str) -> &'static LocaleFormat {
    let exact = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(tag));
    let by_language = || {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        LOCALES.iter().find(|l| {
            l.tag
                .split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
        })
    };
    exact.or_else(by_language).unwrap_or_else(|| {
        tracing::debug!(locale = %tag, fallback = DEFAULT_LOCALE, "unknown locale, using fallback");
        &LOCALES[0]
    })
}

fn validate_currency(code: &str) -> Result<String> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(Error::invalid_input(
            "currency format",
            format!("'{code}' is not a three-letter ISO 4217 currency code"),
        ))
    }
}

fn validate_digits(name: &str, digits: u8) -> Result<usize> {
    if digits > MAX_FRACTION_DIGITS {
        return Err(Error::out_of_range(
            "currency format",
            digits,
            format!("{name} must be at most {MAX_FRACTION_DIGITS}"),
        ));
    }
    Ok(usize::from(digits))
}

/// Formats `amount` as a currency string.
pub fn format(amount: f64, options: &CurrencyOptions) -> Result<String> {
    if !amount.is_finite() {
        return Err(Error::invalid_input(
            "currency format",
            format!("amount must be finite, got {amount}"),
        ));
    }

    let locale = resolve_locale(options.locale.as_deref().unwrap_or(DEFAULT_LOCALE));
    let currency = validate_currency(options.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))?;
    let min_digits = validate_digits(
        "minimum_fraction_digits",
        options
            .minimum_fraction_digits
            .unwrap_or(DEFAULT_FRACTION_DIGITS),
    )?;
    let max_digits = validate_digits(
        "maximum_fraction_digits",
        options
            .maximum_fraction_digits
            .unwrap_or(DEFAULT_FRACTION_DIGITS),
    )?
    .max(min_digits);

    // Round the shortest decimal representation, as Intl-style formatters do.
    let shortest = amount.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let rounded = round_half_up(int_part, frac_part, max_digits);
    let (int_digits, frac_digits) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut fraction = frac_digits.to_string();
    while fraction.len() > min_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut number = group_digits(int_digits, locale.group);
    if !fraction.is_empty() {
        number.push(locale.decimal);
        number.push_str(&fraction);
    }

    let symbol = locale
        .symbols
        .iter()
        .find(|(code, _)| *code == currency)
        .map_or(currency.as_str(), |&(_, symbol)| symbol);
    let sign = if amount < 0.0 { "-" } else { "" };

    let formatted = if locale.symbol_after {
        format!("{sign}{number} {symbol}")
    } else if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
        format!("{sign}{symbol} {number}")
    } else {
        format!("{sign}{symbol}{number}")
    };
    Ok(formatted)
}

/// Formats as Chinese yuan in the `zh-CN` locale.
pub fn format_cny(amount: f64, options: &CurrencyOptions) -> Result<String> {
    format(
        amount,
        &options.clone().with_currency("CNY").with_locale("zh-CN"),
    )
}

/// Formats as US dollars, keeping the caller's locale.
pub fn format_usd(amount: f64, options: &CurrencyOptions) -> Result<String> {
    format(amount, &options.clone().with_currency("USD"))
}

/// Formats as euros in the `de-DE` locale.
pub fn format_eur(amount: f64, options: &CurrencyOptions) -> Result<String> {
    format(
        amount,
        &options.clone().with_currency("EUR").with_locale("de-DE"),
    )
}
