//! Slice and vector helpers.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::Hash;
use utilkit_core::{Error, Result};

/// A value or an arbitrarily nested list of values.
///
/// Deserializes from plain JSON: `[1, [2, [3]]]` becomes
/// `[Item(1), List([Item(2), List([Item(3)])])]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(Vec<Nested<T>>),
    Item(T),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Distinct elements in order of first occurrence.
#[must_use]
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .cloned()
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}

/// Keeps the first element for each distinct key.
#[must_use]
pub fn unique_by<T, K, F>(items: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = IndexSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key_fn(item)))
        .cloned()
        .collect()
}

/// De-duplicates JSON values by their serialized form.
#[must_use]
pub fn unique_json(items: &[Value]) -> Vec<Value> {
    unique_by(items, Value::to_string)
}

/// Concatenates `arrays` in order.
#[must_use]
pub fn merge<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    arrays.concat()
}

#[must_use]
pub fn get<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}

/// Replaces the element at `index`, or appends when `index == items.len()`.
pub fn set<T>(items: &mut Vec<T>, index: usize, value: T) -> Result<()> {
    match index.cmp(&items.len()) {
        std::cmp::Ordering::Less => {
            items[index] = value;
            Ok(())
        }
        std::cmp::Ordering::Equal => {
            items.push(value);
            Ok(())
        }
        std::cmp::Ordering::Greater => Err(Error::out_of_range(
            "array set",
            index,
            format!("index is past the end of a {}-element array", items.len()),
        )),
    }
}

#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; `0.0` for an empty slice.
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values) / values.len() as f64
    }
}

/// Flattens every level of nesting, depth first.
#[must_use]
pub fn flatten<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut out = Vec::new();
    flatten_into(items, &mut out);
    out
}

fn flatten_into<T>(items: Vec<Nested<T>>, out: &mut Vec<T>) {
    for item in items {
        match item {
            Nested::Item(value) => out.push(value),
            Nested::List(list) => flatten_into(list, out),
        }
    }
}

/// Flattens nested JSON arrays; non-array values are kept as they are.
#[must_use]
pub fn flatten_json(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::new();
    for item in items {
        match item {
            Value::Array(inner) => out.extend(flatten_json(inner)),
            other => out.push(other.clone()),
        }
    }
    out
}
