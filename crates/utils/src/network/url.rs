//! URL parsing and query string manipulation.

use ::url::Url;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use utilkit_core::{Error, Result};

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9+\-.]*:").expect("absolute URL pattern is valid"));

/// Parses an absolute URL.
pub fn parse_url(url: &str) -> Result<Url> {
    Ok(Url::parse(url)?)
}

/// Decoded query parameters in order of first appearance.
///
/// A key that appears more than once keeps its first position and its last
/// value.
pub fn get_query_params(url: &str) -> Result<IndexMap<String, String>> {
    let parsed = parse_url(url)?;
    Ok(parsed.query_pairs().into_owned().collect())
}

/// Appends `params` to the query string of `url`.
pub fn add_query_params<K, V>(url: &str, params: impl IntoIterator<Item = (K, V)>) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parsed = parse_url(url)?;
    let mut params = params.into_iter().peekable();
    if params.peek().is_some() {
        parsed.query_pairs_mut().extend_pairs(params);
    }
    Ok(parsed.into())
}

/// Drops every query parameter whose key is in `keys`.
///
/// The `?` disappears when no parameters remain.
pub fn remove_query_params<S: AsRef<str>>(url: &str, keys: &[S]) -> Result<String> {
    let mut parsed = parse_url(url)?;
    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key.as_str()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }
    Ok(parsed.into())
}

/// The last two labels of the host, e.g. `example.com` for
/// `https://sub.example.com/page`.
pub fn get_domain(url: &str) -> Result<String> {
    let parsed = parse_url(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::invalid_input("get_domain", format!("'{url}' has no host")))?;
    let labels: Vec<&str> = host.split('.').collect();
    let start = labels.len().saturating_sub(2);
    Ok(labels[start..].join("."))
}

/// Whether `url` starts with a lowercase scheme followed by `:`.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    ABSOLUTE_URL.is_match(url)
}

/// Resolves `relative` against `base` and returns the resulting href.
pub fn resolve_relative_url(base: &str, relative: &str) -> Result<String> {
    Ok(parse_url(base)?.join(relative)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let parsed =
            parse_url("https://www.example.com:8080/path/to/page?param1=value1&param2=value2#section")
                .unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("www.example.com"));
        assert_eq!(parsed.port(), Some(8080));
        assert_eq!(parsed.path(), "/path/to/page");
        assert_eq!(parsed.query(), Some("param1=value1&param2=value2"));
        assert_eq!(parsed.fragment(), Some("section"));
        assert!(parse_url("/relative/only").is_err());
    }

    #[test]
    fn test_get_query_params() {
        let params = get_query_params("https://www.example.com/page?param1=value1&param2=value2")
            .unwrap();
        let pairs: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("param1", "value1"), ("param2", "value2")]);
    }

    #[test]
    fn test_get_query_params_duplicates_and_encoding() {
        let params = get_query_params("https://x.test/?a=1&b=hello+world&a=3").unwrap();
        assert_eq!(params.get_index(0), Some((&"a".to_string(), &"3".to_string())));
        assert_eq!(params["b"], "hello world");
    }

    #[test]
    fn test_add_query_params() {
        let url = add_query_params(
            "https://www.example.com/page",
            [("param1", "value1"), ("param2", "value2")],
        )
        .unwrap();
        assert_eq!(url, "https://www.example.com/page?param1=value1&param2=value2");

        let unchanged =
            add_query_params("https://www.example.com/page", Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(unchanged, "https://www.example.com/page");
    }

    #[test]
    fn test_remove_query_params() {
        let url = remove_query_params(
            "https://www.example.com/page?param1=value1&param2=value2&param3=value3",
            &["param1", "param3"],
        )
        .unwrap();
        assert_eq!(url, "https://www.example.com/page?param2=value2");

        let bare = remove_query_params("https://www.example.com/page?a=1", &["a"]).unwrap();
        assert_eq!(bare, "https://www.example.com/page");
    }

    #[test]
    fn test_get_domain() {
        assert_eq!(get_domain("https://sub.example.com/page").unwrap(), "example.com");
        assert_eq!(get_domain("http://localhost:3000").unwrap(), "localhost");
        assert!(get_domain("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://www.example.com"));
        assert!(is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url("/path/to/page"));
        assert!(!is_absolute_url("//cdn.example.com/lib.js"));
    }

    #[test]
    fn test_resolve_relative_url() {
        assert_eq!(
            resolve_relative_url("https://www.example.com/path/", "../page").unwrap(),
            "https://www.example.com/page"
        );
        assert_eq!(
            resolve_relative_url("https://www.example.com/a/b", "c?d=1").unwrap(),
            "https://www.example.com/a/c?d=1"
        );
    }
}
