//! Base64 encoding, validation and alphabet conversion.
//!
//! Encoding always works on UTF-8 bytes with the standard alphabet and `=`
//! padding. Validation follows the grammar
//!
//! ```text
//! [data:<type>/<subtype>;base64,] (4 chars)* [2 chars "==" | 3 chars "="]
//! ```
//!
//! where the MIME prefix and the padding are controlled by
//! [`IsBase64Options`].

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utilkit_core::Result;

const PADDED_BODY: &str = r"(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?";
const UNPADDED_BODY: &str =
    r"(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}(?:==)?|[A-Za-z0-9+/]{3}=?)?";
const MIME_PREFIX: &str = r"(?:data:[A-Za-z0-9_]+/[a-zA-Z+\-.]+;base64,)";

/// How a `data:` prefix is treated by [`is_base64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MimeMode {
    Forbidden,
    Optional,
    Required,
}

fn build_pattern(mime: MimeMode, padding_required: bool) -> Regex {
    let body = if padding_required {
        PADDED_BODY
    } else {
        UNPADDED_BODY
    };
    let prefix = match mime {
        MimeMode::Forbidden => String::new(),
        MimeMode::Optional => format!("{MIME_PREFIX}?"),
        MimeMode::Required => MIME_PREFIX.to_string(),
    };
    Regex::new(&format!("(?i)^{prefix}{body}$")).expect("base64 grammar is a valid regex")
}

// Index: mime mode * 2 + padding_required
static PATTERNS: Lazy<[Regex; 6]> = Lazy::new(|| {
    [
        build_pattern(MimeMode::Forbidden, false),
        build_pattern(MimeMode::Forbidden, true),
        build_pattern(MimeMode::Optional, false),
        build_pattern(MimeMode::Optional, true),
        build_pattern(MimeMode::Required, false),
        build_pattern(MimeMode::Required, true),
    ]
});

/// Options for [`is_base64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsBase64Options {
    /// Accept the empty string
    pub allow_empty: bool,
    /// Demand a `data:<mime>;base64,` prefix
    pub mime_required: bool,
    /// Accept, but do not demand, a `data:<mime>;base64,` prefix
    pub allow_mime: bool,
    /// Demand `=` padding on the final group
    pub padding_required: bool,
}

impl Default for IsBase64Options {
    fn default() -> Self {
        Self {
            allow_empty: true,
            mime_required: false,
            allow_mime: false,
            padding_required: true,
        }
    }
}

impl IsBase64Options {
    fn mime_mode(&self) -> MimeMode {
        if self.mime_required {
            MimeMode::Required
        } else if self.allow_mime {
            MimeMode::Optional
        } else {
            MimeMode::Forbidden
        }
    }
}

/// Encodes the UTF-8 bytes of `value` as standard, padded base64.
#[must_use]
pub fn encode(value: &str) -> String {
    encode_bytes(value.as_bytes())
}

#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes base64 into raw bytes.
///
/// Missing padding and URL-safe characters (`-`, `_`) are tolerated.
pub fn decode_bytes(value: &str) -> Result<Vec<u8>> {
    let normalized = url_safe_to_base64(value.trim());
    Ok(STANDARD.decode(normalized)?)
}

/// Decodes base64 into a UTF-8 string.
pub fn decode(value: &str) -> Result<String> {
    Ok(String::from_utf8(decode_bytes(value)?)?)
}

/// Checks whether `value` is base64 according to `options`.
///
/// ```
/// use utilkit_utils::text::base64::{is_base64, IsBase64Options};
///
/// assert!(is_base64("uuLMhh==", &IsBase64Options::default()));
/// assert!(!is_base64("uuLMhh", &IsBase64Options::default()));
/// let lenient = IsBase64Options { padding_required: false, ..Default::default() };
/// assert!(is_base64("uuLMhh", &lenient));
/// ```
#[must_use]
pub fn is_base64(value: &str, options: &IsBase64Options) -> bool {
    if value.is_empty() {
        return options.allow_empty;
    }
    let index = match options.mime_mode() {
        MimeMode::Forbidden => 0,
        MimeMode::Optional => 2,
        MimeMode::Required => 4,
    } + usize::from(options.padding_required);
    PATTERNS[index].is_match(value)
}

/// Strips trailing `=` padding.
#[must_use]
pub fn remove_base64_padding(value: &str) -> &str {
    value.trim_end_matches('=')
}

/// Pads `value` with `=` up to a multiple of four characters.
#[must_use]
pub fn add_base64_padding(value: &str) -> String {
    let rem = value.len() % 4;
    if rem == 0 {
        return value.to_string();
    }
    let mut padded = String::with_capacity(value.len() + 4 - rem);
    padded.push_str(value);
    padded.extend(std::iter::repeat('=').take(4 - rem));
    padded
}

/// Converts the URL-safe alphabet back to the standard one and restores
/// padding.
#[must_use]
pub fn url_safe_to_base64(value: &str) -> String {
    let standard: String = value
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    add_base64_padding(&standard)
}

/// Converts standard base64 to the URL-safe alphabet without padding.
#[must_use]
pub fn base64_to_url_safe(value: &str) -> String {
    remove_base64_padding(value)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &str = "iVBORw0KGgoAAAANSUhEUgAABQAAAALQAQMAAAD1s08VAAAAA1BMVEX/AAAZ4gk3AAAAh0lEQVR42u3BMQEAAADCoPVPbQlPoAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB4GsTfAAGc95RKAAAAAElFTkSuQmCC";

    fn png_with_mime() -> String {
        format!("data:image/png;base64,{PNG}")
    }

    #[test]
    fn test_encode_decode_utf8() {
        assert_eq!(encode("Hello，世界"), "SGVsbG/vvIzkuJbnlYw=");
        assert_eq!(decode("SGVsbG/vvIzkuJbnlYw=").unwrap(), "Hello，世界");
    }

    #[test]
    fn test_decode_is_lenient_about_padding_and_alphabet() {
        assert_eq!(decode("SGVsbG8").unwrap(), "Hello");
        assert_eq!(decode_bytes("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("afQ$%rfew").is_err());
        // Valid base64 that is not UTF-8
        assert!(decode("/w==").is_err());
    }

    #[test]
    fn test_is_base64_with_and_without_mime() {
        let defaults = IsBase64Options::default();
        assert!(is_base64(PNG, &defaults));
        assert!(!is_base64(&png_with_mime(), &defaults));

        let allow_mime = IsBase64Options {
            allow_mime: true,
            ..Default::default()
        };
        assert!(is_base64(&png_with_mime(), &allow_mime));
        assert!(is_base64(PNG, &allow_mime));

        let mime_required = IsBase64Options {
            mime_required: true,
            ..Default::default()
        };
        assert!(!is_base64(PNG, &mime_required));
        assert!(is_base64(&png_with_mime(), &mime_required));
    }

    #[test]
    fn test_is_base64_rejects_invalid() {
        let defaults = IsBase64Options::default();
        assert!(!is_base64("1342234", &defaults));
        assert!(!is_base64("afQ$%rfew", &defaults));
        assert!(!is_base64("dfasdfr342", &defaults));
    }

    #[test]
    fn test_is_base64_padding() {
        let defaults = IsBase64Options::default();
        assert!(is_base64("uuLMhh==", &defaults));
        assert!(!is_base64("uuLMhh", &defaults));
        let lenient = IsBase64Options {
            padding_required: false,
            ..Default::default()
        };
        assert!(is_base64("uuLMhh", &lenient));
        assert!(is_base64("uuLMhh==", &lenient));
    }

    #[test]
    fn test_is_base64_unpadded_keeps_mime_rules() {
        let opts = IsBase64Options {
            padding_required: false,
            mime_required: true,
            ..Default::default()
        };
        assert!(is_base64("data:text/plain;base64,uuLMhh", &opts));
        assert!(!is_base64("uuLMhh", &opts));
    }

    #[test]
    fn test_is_base64_empty() {
        assert!(is_base64("", &IsBase64Options::default()));
        let strict = IsBase64Options {
            allow_empty: false,
            ..Default::default()
        };
        assert!(!is_base64("", &strict));
    }

    #[test]
    fn test_padding_helpers() {
        assert_eq!(remove_base64_padding("SGVsbG8="), "SGVsbG8");
        assert_eq!(add_base64_padding("SGVsbG8"), "SGVsbG8=");
        assert_eq!(add_base64_padding("SGVsbA"), "SGVsbA==");
        assert_eq!(add_base64_padding("SGVs"), "SGVs");
    }

    #[test]
    fn test_url_safe_conversion() {
        assert_eq!(url_safe_to_base64("SGVsbG8-"), "SGVsbG8+");
        assert_eq!(base64_to_url_safe("SGVsbG8+"), "SGVsbG8-");
        assert_eq!(base64_to_url_safe("a/b+cw=="), "a_b-cw");
        assert_eq!(url_safe_to_base64("a_b-cw"), "a/b+cw==");
    }
}
