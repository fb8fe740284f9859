/* src/action/registry.rs */

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::{ActionHandler, HandlerError};
use crate::io::IoSink;
use crate::package::Package;

/// Resolves action names to handlers and invokes them.
pub trait ActionRegistry {
	/// Returns `true` if a handler is registered under exactly `name`.
	fn has_handler(&self, name: &str) -> bool;

	/// Invokes the handler registered under `name`.
	fn invoke(
		&self,
		name: &str,
		payload: &Value,
		package: &Package,
		io: &mut dyn IoSink,
	) -> Result<(), HandlerError>;
}

/// A registry backed by a map of boxed handlers.
#[derive(Default)]
pub struct HandlerRegistry {
	handlers: BTreeMap<String, Box<dyn ActionHandler>>,
}

impl fmt::Debug for HandlerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandlerRegistry")
			.field("handlers", &self.handlers.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl HandlerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a handler, replacing any handler with the same name.
	///
	/// Returns `true` if an existing handler was replaced.
	pub fn register(&mut self, name: impl Into<String>, handler: impl ActionHandler + 'static) -> bool {
		let name = name.into();
		#[cfg(feature = "logging")]
		log::debug!("Registering action handler '{}'", name);
		self.handlers.insert(name, Box::new(handler)).is_some()
	}

	/// Registers a closure as a handler.
	pub fn register_fn<F>(&mut self, name: impl Into<String>, handler: F) -> bool
	where
		F: Fn(&Value, &Package, &mut dyn IoSink) -> Result<(), HandlerError> + Send + Sync + 'static,
	{
		self.register(name, handler)
	}

	/// Removes a handler. Returns `true` if it was registered.
	pub fn unregister(&mut self, name: &str) -> bool {
		self.handlers.remove(name).is_some()
	}

	/// Names of all registered handlers, sorted.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.handlers.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}
}

impl ActionRegistry for HandlerRegistry {
	fn has_handler(&self, name: &str) -> bool {
		self.handlers.contains_key(name)
	}

	fn invoke(
		&self,
		name: &str,
		payload: &Value,
		package: &Package,
		io: &mut dyn IoSink,
	) -> Result<(), HandlerError> {
		let handler = self.handlers.get(name).ok_or_else(|| HandlerError::NotFound {
			name: name.to_string(),
		})?;
		handler.execute(payload, package, io)
	}
}
