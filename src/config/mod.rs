/* src/config/mod.rs */

//!
//! Extra configuration trees read from package manifests.
//!
//! A manifest's `extra` section is kept as an ordered JSON object so that
//! actions run in the order they were declared.

pub mod keys;
mod merge;

pub use merge::{merge, merge_values};

use serde_json::{Map, Value};

/// An ordered mapping of configuration keys to values.
pub type ConfigTree = Map<String, Value>;

/// Returns `true` if `key` is present in `tree` with a non-null value.
pub fn is_set(tree: &ConfigTree, key: &str) -> bool {
	tree.get(key).is_some_and(|value| !value.is_null())
}
