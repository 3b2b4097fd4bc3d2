use proptest::prelude::*;
use utilkit_utils::collections::array::unique;
use utilkit_utils::numeric::bytes::{convert, ByteUnit};
use utilkit_utils::numeric::number::{format_decimal, format_with_commas, gcd};
use utilkit_utils::text::base64::{
    add_base64_padding, base64_to_url_safe, decode, encode, is_base64, remove_base64_padding,
    url_safe_to_base64, IsBase64Options,
};
use utilkit_utils::text::string::{capitalize_first_letter, uncapitalize_first_letter};

fn unit() -> impl Strategy<Value = ByteUnit> {
    prop::sample::select(ByteUnit::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn capitalize_then_uncapitalize_restores_lowercase_start(s in "[a-z][a-zA-Z0-9 ]{0,20}") {
        let capitalized = capitalize_first_letter(&s);
        prop_assert!(capitalized.starts_with(|c: char| c.is_ascii_uppercase()));
        prop_assert_eq!(&capitalized[1..], &s[1..]);
        prop_assert_eq!(uncapitalize_first_letter(&capitalized), s);
    }

    #[test]
    fn encoded_text_is_valid_base64(s in "\\PC{0,40}") {
        let encoded = encode(&s);
        prop_assert!(is_base64(&encoded, &IsBase64Options::default()));
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    #[test]
    fn padding_helpers_are_inverse(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let padded = utilkit_utils::text::base64::encode_bytes(&bytes);
        prop_assert_eq!(add_base64_padding(remove_base64_padding(&padded)), padded);
    }

    #[test]
    fn url_safe_alphabet_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let standard = utilkit_utils::text::base64::encode_bytes(&bytes);
        let url_safe = base64_to_url_safe(&standard);
        prop_assert!(!url_safe.contains(['+', '/', '=']));
        prop_assert_eq!(url_safe_to_base64(&url_safe), standard);
    }

    #[test]
    fn format_decimal_has_requested_places(n in -1.0e9f64..1.0e9, places in 0usize..8) {
        let formatted = format_decimal(n, places);
        let fraction = formatted.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction, places);
    }

    #[test]
    fn commas_do_not_change_digits(n in -1.0e12f64..1.0e12) {
        let grouped = format_with_commas(n);
        prop_assert_eq!(grouped.replace(',', ""), n.to_string());
    }

    #[test]
    fn byte_conversion_round_trips(value in 0.0f64..1.0e6, from in unit(), to in unit()) {
        let there = convert(value, from, to);
        let back = convert(there, to, from);
        prop_assert!((back - value).abs() <= value * 1e-9 + 1e-12);
    }

    #[test]
    fn gcd_divides_both(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let g = gcd(a, b);
        if a != 0 || b != 0 {
            prop_assert!(g > 0);
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        } else {
            prop_assert_eq!(g, 0);
        }
    }

    #[test]
    fn unique_has_no_duplicates(items in prop::collection::vec(0u8..16, 0..64)) {
        let distinct = unique(&items);
        let mut sorted = distinct.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), distinct.len());
        prop_assert!(items.iter().all(|i| distinct.contains(i)));
        if let Some(first) = items.first() {
            prop_assert_eq!(distinct.first(), Some(first));
        }
    }
}
