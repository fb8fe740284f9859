/* src/action/builtin.rs */

//!
//! Built-in filesystem actions.
//!
//! Payload shapes:
//!
//! - `copy`, `move`, `symlink`: `{ "<source>": "<destination>" }` or a list of such objects.
//!   Sources resolve against the package install path (or the root), destinations against the root.
//!   `copy` and `symlink` sources may be `.` to name the whole package; `move` sources may not.
//! - `remove`, `create`: a path string or a list of path strings, resolved against the root.
//!
//! Every path other than a `copy`/`symlink` source must name an entry below its base directory.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use walkdir::WalkDir;

use super::{HandlerError, HandlerRegistry};
use crate::io::IoSink;
use crate::package::Package;

/// Filesystem actions rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FileActions {
	root: Arc<PathBuf>,
}

impl FileActions {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: Arc::new(root.into()),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Registers `copy`, `move`, `remove`, `create` and `symlink`.
	pub fn register_into(&self, registry: &mut HandlerRegistry) {
		let this = self.clone();
		registry.register_fn("copy", move |payload, package, io| this.copy(payload, package, io));
		let this = self.clone();
		registry.register_fn("move", move |payload, package, io| this.rename(payload, package, io));
		let this = self.clone();
		registry.register_fn("symlink", move |payload, package, io| this.symlink(payload, package, io));
		let this = self.clone();
		registry.register_fn("remove", move |payload, _, io| this.remove(payload, io));
		let this = self.clone();
		registry.register_fn("create", move |payload, _, io| this.create(payload, io));
	}

	/// Builds a registry holding only the built-in actions.
	pub fn registry(&self) -> HandlerRegistry {
		let mut registry = HandlerRegistry::new();
		self.register_into(&mut registry);
		registry
	}

	fn copy(&self, payload: &Value, package: &Package, io: &mut dyn IoSink) -> Result<(), HandlerError> {
		let pairs = self.pairs(payload, package, Source::Base)?;
		reject_nested(&pairs)?;
		for (from, to) in pairs {
			if from.is_dir() {
				copy_dir(&from, &to)?;
			} else {
				ensure_parent(&to)?;
				fs::copy(&from, &to)?;
			}
			io.write(&format!("  Copied {} to {}", from.display(), to.display()));
		}
		Ok(())
	}

	fn rename(&self, payload: &Value, package: &Package, io: &mut dyn IoSink) -> Result<(), HandlerError> {
		let pairs = self.pairs(payload, package, Source::Entry)?;
		reject_nested(&pairs)?;
		for (from, to) in pairs {
			ensure_parent(&to)?;
			fs::rename(&from, &to)?;
			io.write(&format!("  Moved {} to {}", from.display(), to.display()));
		}
		Ok(())
	}

	fn symlink(&self, payload: &Value, package: &Package, io: &mut dyn IoSink) -> Result<(), HandlerError> {
		for (from, to) in self.pairs(payload, package, Source::Base)? {
			ensure_parent(&to)?;
			link(&from, &to)?;
			io.write(&format!("  Linked {} to {}", to.display(), from.display()));
		}
		Ok(())
	}

	fn remove(&self, payload: &Value, io: &mut dyn IoSink) -> Result<(), HandlerError> {
		for path in self.paths(payload)? {
			let meta = match fs::symlink_metadata(&path) {
				Ok(meta) => meta,
				Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
				Err(e) => return Err(e.into()),
			};
			if meta.is_dir() {
				fs::remove_dir_all(&path)?;
			} else {
				fs::remove_file(&path)?;
			}
			io.write(&format!("  Removed {}", path.display()));
		}
		Ok(())
	}

	fn create(&self, payload: &Value, io: &mut dyn IoSink) -> Result<(), HandlerError> {
		for path in self.paths(payload)? {
			fs::create_dir_all(&path)?;
			io.write(&format!("  Created {}", path.display()));
		}
		Ok(())
	}

	/// Resolves `{ source: destination }` payloads.
	fn pairs(
		&self,
		payload: &Value,
		package: &Package,
		source: Source,
	) -> Result<Vec<(PathBuf, PathBuf)>, HandlerError> {
		let base = package.install_path().unwrap_or(self.root.as_path());
		let maps: Vec<&serde_json::Map<String, Value>> = match payload {
			Value::Object(map) => vec![map],
			Value::Array(items) => items
				.iter()
				.map(|item| {
					item.as_object()
						.ok_or_else(|| HandlerError::invalid_payload("expected a list of source/destination objects"))
				})
				.collect::<Result<_, _>>()?,
			_ => return Err(HandlerError::invalid_payload("expected a source/destination object")),
		};

		let mut pairs = Vec::new();
		for map in maps {
			for (from, to) in map {
				let to = to
					.as_str()
					.ok_or_else(|| HandlerError::invalid_payload(format!("destination for '{from}' must be a string")))?;
				let from = match source {
					Source::Base => resolve_within(base, from)?,
					Source::Entry => resolve(base, from)?,
				};
				pairs.push((from, resolve(&self.root, to)?));
			}
		}
		Ok(pairs)
	}

	/// Resolves a path string or list of path strings.
	fn paths(&self, payload: &Value) -> Result<Vec<PathBuf>, HandlerError> {
		match payload {
			Value::String(path) => Ok(vec![resolve(&self.root, path)?]),
			Value::Array(items) => items
				.iter()
				.map(|item| match item.as_str() {
					Some(path) => resolve(&self.root, path),
					None => Err(HandlerError::invalid_payload("expected a list of paths")),
				})
				.collect(),
			_ => Err(HandlerError::invalid_payload("expected a path or a list of paths")),
		}
	}
}

/// Whether a source path may name its base directory itself.
#[derive(Debug, Clone, Copy)]
enum Source {
	Base,
	Entry,
}

/// Joins a relative path onto `base`. The result must name an entry below `base`.
fn resolve(base: &Path, relative: &str) -> Result<PathBuf, HandlerError> {
	let path = resolve_within(base, relative)?;
	if !Path::new(relative)
		.components()
		.any(|c| matches!(c, Component::Normal(_)))
	{
		return Err(HandlerError::invalid_payload(format!(
			"path must name an entry inside its base directory: '{relative}'"
		)));
	}
	Ok(path)
}

/// Joins a relative path onto `base`, rejecting absolute paths and `..`.
fn resolve_within(base: &Path, relative: &str) -> Result<PathBuf, HandlerError> {
	let path = Path::new(relative);
	for component in path.components() {
		match component {
			Component::Normal(_) | Component::CurDir => {}
			_ => {
				return Err(HandlerError::invalid_payload(format!(
					"path must stay inside its base directory: {relative}"
				)));
			}
		}
	}
	Ok(base.join(path))
}

fn reject_nested(pairs: &[(PathBuf, PathBuf)]) -> Result<(), HandlerError> {
	match pairs.iter().find(|(from, to)| to.starts_with(from)) {
		Some((from, to)) => Err(HandlerError::invalid_payload(format!(
			"destination {} is inside source {}",
			to.display(),
			from.display()
		))),
		None => Ok(()),
	}
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
		_ => Ok(()),
	}
}

fn copy_dir(from: &Path, to: &Path) -> Result<(), HandlerError> {
	for entry in WalkDir::new(from) {
		let entry = entry.map_err(|e| HandlerError::Io(e.into()))?;
		let relative = entry
			.path()
			.strip_prefix(from)
			.map_err(|e| HandlerError::custom(e.to_string()))?;
		let target = to.join(relative);
		if entry.file_type().is_dir() {
			fs::create_dir_all(&target)?;
		} else {
			ensure_parent(&target)?;
			fs::copy(entry.path(), &target)?;
		}
	}
	Ok(())
}

#[cfg(unix)]
fn link(from: &Path, to: &Path) -> Result<(), HandlerError> {
	std::os::unix::fs::symlink(from, to)?;
	Ok(())
}

#[cfg(not(unix))]
fn link(_from: &Path, _to: &Path) -> Result<(), HandlerError> {
	Err(HandlerError::custom("symlinks are not supported on this platform"))
}
