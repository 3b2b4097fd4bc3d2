//! Shallow and deep copies.
//!
//! A shallow clone builds a new container around the same `Arc` children,
//! so mutations made through interior mutability stay visible to both
//! copies. A deep clone goes through the serde data model and shares nothing.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::hash::Hash;
use std::sync::Arc;
use utilkit_core::Result;

/// New vector, same children.
#[must_use]
pub fn clone_shallow<T: ?Sized>(items: &[Arc<T>]) -> Vec<Arc<T>> {
    items.to_vec()
}

/// New map, same children, same key order.
#[must_use]
pub fn clone_shallow_map<K, T>(map: &IndexMap<K, Arc<T>>) -> IndexMap<K, Arc<T>>
where
    K: Clone + Eq + Hash,
    T: ?Sized,
{
    map.iter()
        .map(|(k, v)| (k.clone(), Arc::clone(v)))
        .collect()
}

/// Fully independent copy made by serializing and deserializing `value`.
pub fn clone_deep<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}
