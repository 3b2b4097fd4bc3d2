//! Helpers for slices, JSON objects and cloning
//!
//! ## Key Components
//!
//! - **`array`**: de-duplication, safe indexing, sums and deep flattening.
//! - **`object`**: key access, structural equality and shallow merging over
//!   `serde_json` values.
//! - **`clone`**: shallow copies that share children and deep copies through
//!   the serde data model.

pub mod array;
pub mod clone;
pub mod object;

pub use array::Nested;
pub use clone::{clone_deep, clone_shallow, clone_shallow_map};
