/* src/config/merge.rs */

use serde_json::Value;

use super::ConfigTree;

/// Recursively merges a dependency's configuration with the project's.
///
/// Keys present in both trees are merged recursively when both values are
/// objects. Otherwise the project value replaces the dependency value.
/// Keys present on one side only are kept as they are. Sequences are replaced
/// as a whole, never merged element-wise.
///
/// Overridden keys keep their position from `dependency`. Keys only found in
/// `project` are appended in project order.
pub fn merge(dependency: &ConfigTree, project: &ConfigTree) -> ConfigTree {
	let mut merged = dependency.clone();

	for (key, value) in project {
		let next = match merged.get(key) {
			Some(existing) => merge_values(existing, value),
			None => value.clone(),
		};
		merged.insert(key.clone(), next);
	}

	merged
}

/// Merges two arbitrary values with the same rules as [`merge`].
pub fn merge_values(dependency: &Value, project: &Value) -> Value {
	match (dependency, project) {
		(Value::Object(dep), Value::Object(proj)) => Value::Object(merge(dep, proj)),
		_ => project.clone(),
	}
}
