//! Object helpers over `serde_json` values.
//!
//! Maps keep insertion order, so [`keys`] reports keys in the order they were
//! written. Equality is structural and ignores key order.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::Any;
use utilkit_core::{Error, Result};

#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Every JSON object is a plain key/value map.
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    is_object(value)
}

/// True for `null`, scalars and empty containers; scalars own no keys.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => true,
    }
}

#[must_use]
pub fn get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key)
}

/// Inserts or replaces `key`. Fails when `value` is not an object.
pub fn set(value: &mut Value, key: impl Into<String>, new_value: Value) -> Result<()> {
    let map = value
        .as_object_mut()
        .ok_or_else(|| Error::invalid_input("object set", "target is not a JSON object"))?;
    map.insert(key.into(), new_value);
    Ok(())
}

/// Keys of an object in insertion order; empty for anything else.
#[must_use]
pub fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

/// Structural equality of two serializable values.
pub fn is_equal<A: Serialize + ?Sized, B: Serialize + ?Sized>(a: &A, b: &B) -> Result<bool> {
    Ok(serde_json::to_value(a)? == serde_json::to_value(b)?)
}

fn expect_object(value: Value, what: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid_input(
            "object merge",
            format!("{what} must serialize to a JSON object, got {other}"),
        )),
    }
}

/// Overlays the top-level keys of each patch onto `target`; later patches
/// win. Nested objects are replaced, not merged.
pub fn merge<T, P>(target: &T, patches: &[P]) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize,
{
    let mut merged = expect_object(serde_json::to_value(target)?, "target")?;
    for patch in patches {
        merged.extend(expect_object(serde_json::to_value(patch)?, "patch")?);
    }
    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// Whether `value` is exactly a `T`.
#[must_use]
pub fn is_instance_of_exact<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Server {
        host: String,
        port: u16,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_object_predicates() {
        assert!(is_object(&json!({})));
        assert!(is_plain_object(&json!({"a": 1})));
        assert!(!is_object(&json!([])));
        assert!(!is_object(&Value::Null));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"a": 1})));
        assert!(is_empty(&json!(42)));
    }

    #[test]
    fn test_get_set_and_keys() {
        let mut value = json!({"b": 1, "a": 2});
        assert_eq!(get(&value, "a"), Some(&json!(2)));
        assert_eq!(get(&value, "missing"), None);
        set(&mut value, "c", json!(3)).unwrap();
        set(&mut value, "b", json!(10)).unwrap();
        assert_eq!(keys(&value), vec!["b", "a", "c"]);
        assert_eq!(value["b"], 10);

        let mut list = json!([1]);
        assert!(set(&mut list, "x", json!(1)).is_err());
        assert!(keys(&list).is_empty());
    }

    #[test]
    fn test_is_equal_ignores_key_order() {
        assert!(is_equal(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [1, 2], "a": 1})).unwrap());
        assert!(!is_equal(&json!({"a": 1}), &json!({"a": "1"})).unwrap());
        let server = Server {
            host: "localhost".into(),
            port: 80,
            tags: vec![],
        };
        assert!(is_equal(&server, &json!({"port": 80, "host": "localhost", "tags": []})).unwrap());
    }

    #[test]
    fn test_merge_later_patches_win() {
        let base = Server {
            host: "localhost".into(),
            port: 80,
            tags: vec!["a".into()],
        };
        let merged = merge(&base, &[json!({"port": 8080}), json!({"port": 9090, "tags": []})]).unwrap();
        assert_eq!(
            merged,
            Server {
                host: "localhost".into(),
                port: 9090,
                tags: vec![],
            }
        );
        assert_eq!(base.port, 80);
    }

    #[test]
    fn test_merge_rejects_non_objects() {
        assert!(merge(&json!([1]), &[json!({})]).is_err());
        assert!(merge(&json!({}), &[json!(1)]).is_err());
        assert!(merge(&json!({"port": 1}), &[json!({"port": "x"})]).is_ok());
        let bad: Result<Server> = merge(
            &Server {
                host: "h".into(),
                port: 1,
                tags: vec![],
            },
            &[json!({"port": "x"})],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_is_instance_of_exact() {
        let value: Box<dyn Any> = Box::new(5u32);
        assert!(is_instance_of_exact::<u32>(value.as_ref()));
        assert!(!is_instance_of_exact::<u64>(value.as_ref()));
    }
}
