/* src/package.rs */

//!
//! Packages and the lifecycle events that trigger actions.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigTree, keys};

/// A package as seen by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
	/// Unique package name, e.g. `acme/lib`.
	pub name: String,
	/// The manifest's `extra` section.
	pub extra: ConfigTree,
	/// Directory the package was installed into, if known.
	pub install_path: Option<PathBuf>,
}

impl Package {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			extra: ConfigTree::new(),
			install_path: None,
		}
	}

	pub fn with_extra(mut self, extra: ConfigTree) -> Self {
		self.extra = extra;
		self
	}

	pub fn with_install_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.install_path = Some(path.into());
		self
	}

	pub fn install_path(&self) -> Option<&Path> {
		self.install_path.as_deref()
	}
}

/// The lifecycle event a dispatch runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
	Install,
	Update,
}

impl EventType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Install => "install",
			Self::Update => "update",
		}
	}

	/// The `extra` key holding the actions for this event.
	pub fn namespace(&self) -> &'static str {
		match self {
			Self::Install => keys::POST_PACKAGE_INSTALL,
			Self::Update => keys::POST_PACKAGE_UPDATE,
		}
	}

	/// Legacy key that also marks actions as present for this event.
	pub fn legacy_alias(&self) -> Option<&'static str> {
		match self {
			Self::Install => Some(keys::FILE_MANAGEMENT),
			Self::Update => None,
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The package operation reported by the host package manager.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
	Install { package: Package },
	Update { initial: Package, target: Package },
}

impl Operation {
	pub fn event_type(&self) -> EventType {
		match self {
			Self::Install { .. } => EventType::Install,
			Self::Update { .. } => EventType::Update,
		}
	}

	/// The package actions run against: the installed one, or the update target.
	pub fn package(&self) -> &Package {
		match self {
			Self::Install { package } => package,
			Self::Update { target, .. } => target,
		}
	}
}

/// A post-install or post-update event together with the project's root package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageEvent {
	pub operation: Operation,
	/// The consuming project, whose `extra` overrides the package's.
	pub project: Package,
}
