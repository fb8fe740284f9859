/* src/dispatch/mod.rs */

//!
//! Runs the actions a merged configuration declares for one package event.

mod report;

pub use report::DispatchReport;

use serde_json::Value;

#[cfg(feature = "logging")]
use log::{debug, error, warn};

use crate::action::ActionRegistry;
use crate::config::{ConfigTree, is_set};
use crate::io::IoSink;
use crate::package::{EventType, Package};

/// Resolves and invokes the actions declared for a package.
///
/// Every failure is reported to the [`IoSink`] and then swallowed, so one
/// broken action never stops the others.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
	legacy_alias: bool,
}

/// Builder for [`ActionDispatcher`].
#[derive(Debug, Clone)]
pub struct ActionDispatcherBuilder {
	legacy_alias: bool,
}

impl ActionDispatcherBuilder {
	pub fn new() -> Self {
		Self { legacy_alias: true }
	}

	/// Whether `file-management` marks install actions as present. Enabled by default.
	pub fn legacy_alias(mut self, enabled: bool) -> Self {
		self.legacy_alias = enabled;
		self
	}

	pub fn build(self) -> ActionDispatcher {
		ActionDispatcher {
			legacy_alias: self.legacy_alias,
		}
	}
}

impl Default for ActionDispatcherBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl Default for ActionDispatcher {
	fn default() -> Self {
		ActionDispatcherBuilder::new().build()
	}
}

impl ActionDispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn builder() -> ActionDispatcherBuilder {
		ActionDispatcherBuilder::new()
	}

	/// Returns `true` if `config` declares actions for `event`.
	///
	/// For installs the legacy `file-management` key also counts, even though
	/// actions are only ever read from the event namespace.
	pub fn has_actions(&self, event: EventType, config: &ConfigTree) -> bool {
		if is_set(config, event.namespace()) {
			return true;
		}
		match event.legacy_alias() {
			Some(alias) if self.legacy_alias => is_set(config, alias),
			_ => false,
		}
	}

	/// Invokes, in declaration order, every action that lists `package`.
	pub fn dispatch(
		&self,
		event: EventType,
		config: &ConfigTree,
		package: &Package,
		io: &mut dyn IoSink,
		registry: &dyn ActionRegistry,
	) -> DispatchReport {
		let mut report = DispatchReport::default();

		if !self.has_actions(event, config) {
			return report;
		}
		report.has_actions = true;

		let actions = match config.get(event.namespace()) {
			Some(Value::Object(actions)) => actions,
			Some(Value::Null) | None => {
				#[cfg(feature = "logging")]
				debug!(
					"Only legacy '{}' declared for {}, no {} actions to run",
					event.legacy_alias().unwrap_or_default(),
					package.name,
					event
				);
				return report;
			}
			Some(_) => {
				io.write_warning(&format!(
					"Skipping package actions for {}: '{}' must map action names to packages.",
					package.name,
					event.namespace()
				));
				return report;
			}
		};

		for (action, targets) in actions {
			let Some(payload) = targets
				.as_object()
				.and_then(|targets| targets.get(&package.name))
			else {
				report.skipped.push(action.clone());
				continue;
			};

			if !registry.has_handler(action) {
				#[cfg(feature = "logging")]
				warn!("Unknown package action '{}' for {}", action, package.name);
				io.write_warning(&format!(
					"Skipping package action: {}, no handler registered.",
					action
				));
				report.unknown.push(action.clone());
				continue;
			}

			#[cfg(feature = "logging")]
			debug!("Running {} action '{}' on {}", event, action, package.name);

			match registry.invoke(action, payload, package, io) {
				Ok(()) => report.invoked.push(action.clone()),
				Err(e) => {
					#[cfg(feature = "logging")]
					error!("Action '{}' failed on {}: {}", action, package.name, e);
					io.write_error(&format!(
						"Error: {} action on {} : \n{}",
						action, package.name, e
					));
					report.failed.push((action.clone(), e.to_string()));
				}
			}
		}

		report
	}
}
